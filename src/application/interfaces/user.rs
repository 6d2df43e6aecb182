use crate::error::AppError;
use crate::model::options::UserListOptions;
use crate::model::rate::RateLimits;
use crate::model::response::Response;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by login, or the authenticated user when `user` is empty
    async fn get_user(&self, user: &str) -> Result<Response<User>, AppError>;

    /// Lists every user in sign-up order
    ///
    /// Pagination is driven by `since`; the next value is reported in
    /// `Response::next_page_token`.
    async fn list_users(
        &self,
        opts: Option<&UserListOptions>,
    ) -> Result<Response<Vec<User>>, AppError>;

    /// Gets the current rate limits of every category
    ///
    /// Always sent, even when the stored core limit is exhausted, and
    /// refreshes the limits tracked by the client.
    async fn rate_limits(&self) -> Result<Response<RateLimits>, AppError>;
}
