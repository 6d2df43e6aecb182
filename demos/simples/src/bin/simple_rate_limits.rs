use gh_client::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new().with_retry(RetryConfig::with_max_retries(2));
    let client = Client::new(config)?;

    let limits = client.rate_limits().await?.into_inner();
    if let Some(core) = &limits.core {
        info!("core: {}/{} used {}, resets at {}", core.remaining, core.limit, core.used, core.reset);
    }
    if let Some(search) = &limits.search {
        info!("search: {}/{}", search.remaining, search.limit);
    }

    // The client now refuses requests in exhausted categories without calling the API
    match client.get_user("octocat").await {
        Ok(user) => info!("octocat joined on {:?}", user.data.created_at),
        Err(e) if e.is_rate_limited() => warn!("Rate limited: {}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
