/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::environment::EnvironmentService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{EnvironmentListOptions, add_options};
use crate::model::requests::CreateUpdateEnvironment;
use crate::model::response::Response;
use crate::presentation::environment::{EnvResponse, Environment};
use async_trait::async_trait;
use tracing::{debug, info};
use urlencoding::encode;

fn environment_path(owner: &str, repo: &str, name: &str) -> String {
    format!("repos/{owner}/{repo}/environments/{}", encode(name))
}

#[async_trait]
impl EnvironmentService for Client {
    async fn list_environments(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&EnvironmentListOptions>,
    ) -> Result<Response<EnvResponse>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/environments"), opts)?;
        let result: Response<EnvResponse> = self.get(&path).await?;
        debug!("Environments obtained: {}", result.data.total_count);
        Ok(result)
    }

    async fn get_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Response<Environment>, AppError> {
        self.get(&environment_path(owner, repo, name)).await
    }

    async fn create_update_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        environment: Option<&CreateUpdateEnvironment>,
    ) -> Result<Response<Environment>, AppError> {
        info!("Creating or updating environment {} of {}/{}", name, owner, repo);
        let empty = CreateUpdateEnvironment::default();
        let body = environment.unwrap_or(&empty);
        self.put(&environment_path(owner, repo, name), body).await
    }

    async fn delete_environment(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Response<()>, AppError> {
        info!("Deleting environment {} of {}/{}", name, owner, repo);
        self.delete(&environment_path(owner, repo, name)).await
    }
}
