use crate::error::AppError;
use crate::model::options::{DeploymentsListOptions, ListOptions};
use crate::model::requests::{DeploymentRequest, DeploymentStatusRequest};
use crate::model::response::Response;
use crate::presentation::deployment::{Deployment, DeploymentStatus};
use async_trait::async_trait;

/// Interface for the deployment service
#[async_trait]
pub trait DeploymentService: Send + Sync {
    /// Lists deployments
    async fn list_deployments(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&DeploymentsListOptions>,
    ) -> Result<Response<Vec<Deployment>>, AppError>;

    /// Gets a deployment
    async fn get_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<Deployment>, AppError>;

    /// Creates a deployment
    ///
    /// When the default branch is merged into the ref first the server may
    /// answer `202 Accepted`, surfaced as [`AppError::Accepted`].
    async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        request: &DeploymentRequest,
    ) -> Result<Response<Deployment>, AppError>;

    /// Deletes an inactive deployment
    async fn delete_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<()>, AppError>;

    /// Lists the statuses of a deployment
    async fn list_deployment_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Vec<DeploymentStatus>>, AppError>;

    /// Gets a deployment status
    async fn get_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        status_id: u64,
    ) -> Result<Response<DeploymentStatus>, AppError>;

    /// Creates a deployment status
    async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        request: &DeploymentStatusRequest,
    ) -> Result<Response<DeploymentStatus>, AppError>;
}
