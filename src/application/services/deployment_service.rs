/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::deployment::DeploymentService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{DeploymentsListOptions, ListOptions, add_options};
use crate::model::requests::{DeploymentRequest, DeploymentStatusRequest};
use crate::model::response::Response;
use crate::presentation::deployment::{Deployment, DeploymentStatus};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl DeploymentService for Client {
    async fn list_deployments(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&DeploymentsListOptions>,
    ) -> Result<Response<Vec<Deployment>>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/deployments"), opts)?;
        let result: Response<Vec<Deployment>> = self.get(&path).await?;
        debug!("Deployments obtained: {} deployments", result.data.len());
        Ok(result)
    }

    async fn get_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<Deployment>, AppError> {
        self.get(&format!("repos/{owner}/{repo}/deployments/{deployment_id}"))
            .await
    }

    async fn create_deployment(
        &self,
        owner: &str,
        repo: &str,
        request: &DeploymentRequest,
    ) -> Result<Response<Deployment>, AppError> {
        info!(
            "Creating deployment of {} in {}/{}",
            request.git_ref.as_deref().unwrap_or_default(),
            owner,
            repo
        );
        self.post(&format!("repos/{owner}/{repo}/deployments"), request)
            .await
    }

    async fn delete_deployment(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Deleting deployment {} of {}/{}", deployment_id, owner, repo);
        self.delete(&format!("repos/{owner}/{repo}/deployments/{deployment_id}"))
            .await
    }

    async fn list_deployment_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Vec<DeploymentStatus>>, AppError> {
        let path = add_options(
            &format!("repos/{owner}/{repo}/deployments/{deployment_id}/statuses"),
            opts,
        )?;
        self.get(&path).await
    }

    async fn get_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        status_id: u64,
    ) -> Result<Response<DeploymentStatus>, AppError> {
        self.get(&format!(
            "repos/{owner}/{repo}/deployments/{deployment_id}/statuses/{status_id}"
        ))
        .await
    }

    async fn create_deployment_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        request: &DeploymentStatusRequest,
    ) -> Result<Response<DeploymentStatus>, AppError> {
        info!(
            "Setting deployment {} of {}/{} to {}",
            deployment_id,
            owner,
            repo,
            request.state.as_deref().unwrap_or_default()
        );
        self.post(
            &format!("repos/{owner}/{repo}/deployments/{deployment_id}/statuses"),
            request,
        )
        .await
    }
}
