/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::repository::RepositoryService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{
    ListContributorsOptions, RepositoryListByOrgOptions, RepositoryListOptions, add_options,
};
use crate::model::response::Response;
use crate::presentation::repository::{Contributor, Repository, Topics};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl RepositoryService for Client {
    async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response<Repository>, AppError> {
        debug!("Getting repository {}/{}", owner, repo);
        self.get(&format!("repos/{owner}/{repo}")).await
    }

    async fn list_repositories(
        &self,
        user: &str,
        opts: Option<&RepositoryListOptions>,
    ) -> Result<Response<Vec<Repository>>, AppError> {
        let base = if user.is_empty() {
            "user/repos".to_string()
        } else {
            format!("users/{user}/repos")
        };
        let path = add_options(&base, opts)?;
        let result: Response<Vec<Repository>> = self.get(&path).await?;
        debug!("Repositories obtained: {} repositories", result.data.len());
        Ok(result)
    }

    async fn list_org_repositories(
        &self,
        org: &str,
        opts: Option<&RepositoryListByOrgOptions>,
    ) -> Result<Response<Vec<Repository>>, AppError> {
        let path = add_options(&format!("orgs/{org}/repos"), opts)?;
        let result: Response<Vec<Repository>> = self.get(&path).await?;
        debug!(
            "Repositories of {} obtained: {} repositories",
            org,
            result.data.len()
        );
        Ok(result)
    }

    async fn create_repository(
        &self,
        org: &str,
        repository: &Repository,
    ) -> Result<Response<Repository>, AppError> {
        let path = if org.is_empty() {
            "user/repos".to_string()
        } else {
            format!("orgs/{org}/repos")
        };
        info!(
            "Creating repository {}",
            repository.name.as_deref().unwrap_or_default()
        );
        self.post(&path, repository).await
    }

    async fn edit_repository(
        &self,
        owner: &str,
        repo: &str,
        repository: &Repository,
    ) -> Result<Response<Repository>, AppError> {
        info!("Editing repository {}/{}", owner, repo);
        self.patch(&format!("repos/{owner}/{repo}"), repository).await
    }

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<Response<()>, AppError> {
        info!("Deleting repository {}/{}", owner, repo);
        self.delete(&format!("repos/{owner}/{repo}")).await
    }

    async fn list_topics(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response<Vec<String>>, AppError> {
        let result: Response<Topics> = self.get(&format!("repos/{owner}/{repo}/topics")).await?;
        Ok(result.map(|topics| topics.names))
    }

    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<Response<Vec<String>>, AppError> {
        info!("Replacing topics of {}/{} with {:?}", owner, repo, topics);
        let body = Topics {
            names: topics.to_vec(),
        };
        let result: Response<Topics> = self
            .put(&format!("repos/{owner}/{repo}/topics"), &body)
            .await?;
        Ok(result.map(|topics| topics.names))
    }

    async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListContributorsOptions>,
    ) -> Result<Response<Vec<Contributor>>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/contributors"), opts)?;
        self.get(&path).await
    }
}
