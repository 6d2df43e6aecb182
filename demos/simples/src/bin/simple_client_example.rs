use gh_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // Token and endpoints come from GITHUB_TOKEN / GITHUB_API_URL or .env
    let client = Client::new(Config::new())?;
    info!("Client created, authenticated: {}", client.is_authenticated());

    let repo = client.get_repository("rust-lang", "rust").await?;
    info!(
        "{} has {} stars",
        repo.data.full_name.as_deref().unwrap_or_default(),
        repo.data.stargazers_count.unwrap_or_default()
    );

    let opts = IssueListByRepoOptions {
        state: Some("open".to_string()),
        labels: vec!["E-easy".to_string()],
        list: ListOptions::new(1, 5),
        ..Default::default()
    };
    let issues = client
        .list_repository_issues("rust-lang", "rust", Some(&opts))
        .await?;
    for issue in &issues.data {
        info!(
            "#{} {}",
            issue.number.unwrap_or_default(),
            issue.title.as_deref().unwrap_or_default()
        );
    }
    info!("Next page: {}, last page: {}", issues.next_page, issues.last_page);

    if let Some(rate) = issues.rate {
        info!("Core quota: {}/{} until {}", rate.remaining, rate.limit, rate.reset);
    }

    Ok(())
}
