use crate::error::AppError;
use crate::model::options::EnvironmentListOptions;
use crate::model::requests::CreateUpdateEnvironment;
use crate::model::response::Response;
use crate::presentation::environment::{EnvResponse, Environment};
use async_trait::async_trait;

/// Interface for the deployment environment service
///
/// Environment names may contain any character; they are escaped before
/// being placed in the path.
#[async_trait]
pub trait EnvironmentService: Send + Sync {
    /// Lists the environments of a repository
    async fn list_environments(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&EnvironmentListOptions>,
    ) -> Result<Response<EnvResponse>, AppError>;

    /// Gets an environment
    async fn get_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Response<Environment>, AppError>;

    /// Creates an environment or updates its protection rules
    ///
    /// `None` sends an empty object, creating the environment without rules.
    async fn create_update_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        environment: Option<&CreateUpdateEnvironment>,
    ) -> Result<Response<Environment>, AppError>;

    /// Deletes an environment
    async fn delete_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Response<()>, AppError>;
}
