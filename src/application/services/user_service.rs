/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{UserListOptions, add_options};
use crate::model::rate::{RateLimits, RateLimitsResponse};
use crate::model::response::Response;
use crate::presentation::user::User;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl UserService for Client {
    async fn get_user(&self, user: &str) -> Result<Response<User>, AppError> {
        let path = if user.is_empty() {
            "user".to_string()
        } else {
            format!("users/{user}")
        };
        info!("Getting user {}", if user.is_empty() { "<authenticated>" } else { user });
        self.get(&path).await
    }

    async fn list_users(
        &self,
        opts: Option<&UserListOptions>,
    ) -> Result<Response<Vec<User>>, AppError> {
        let path = add_options("users", opts)?;
        let result: Response<Vec<User>> = self.get(&path).await?;
        debug!("Users obtained: {} users", result.data.len());
        Ok(result)
    }

    async fn rate_limits(&self) -> Result<Response<RateLimits>, AppError> {
        let request = self.new_request(Method::GET, "rate_limit", None::<&()>)?;
        let result: Response<RateLimitsResponse> =
            self.execute_bypassing_rate_limit(request).await?;

        for (category, rate) in result.data.resources.by_category() {
            debug!("Rate limit {:?}: {}/{}", category, rate.remaining, rate.limit);
            self.store_rate(category, rate);
        }
        Ok(result.map(|r| r.resources))
    }
}
