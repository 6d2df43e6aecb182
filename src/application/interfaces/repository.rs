use crate::error::AppError;
use crate::model::options::{
    ListContributorsOptions, RepositoryListByOrgOptions, RepositoryListOptions,
};
use crate::model::response::Response;
use crate::presentation::repository::{Contributor, Repository};
use async_trait::async_trait;

/// Interface for the repository service
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Gets a repository
    async fn get_repository(&self, owner: &str, repo: &str)
    -> Result<Response<Repository>, AppError>;

    /// Lists the repositories of `user`
    ///
    /// An empty `user` lists the repositories the authenticated user can
    /// access, which also honors `visibility` and `affiliation`.
    async fn list_repositories(
        &self,
        user: &str,
        opts: Option<&RepositoryListOptions>,
    ) -> Result<Response<Vec<Repository>>, AppError>;

    /// Lists the repositories of an organization
    async fn list_org_repositories(
        &self,
        org: &str,
        opts: Option<&RepositoryListByOrgOptions>,
    ) -> Result<Response<Vec<Repository>>, AppError>;

    /// Creates a repository in `org`, or for the authenticated user when `org` is empty
    async fn create_repository(
        &self,
        org: &str,
        repository: &Repository,
    ) -> Result<Response<Repository>, AppError>;

    /// Updates the fields set on `repository`
    async fn edit_repository(
        &self,
        owner: &str,
        repo: &str,
        repository: &Repository,
    ) -> Result<Response<Repository>, AppError>;

    /// Deletes a repository
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<Response<()>, AppError>;

    /// Lists the topics of a repository
    async fn list_topics(&self, owner: &str, repo: &str)
    -> Result<Response<Vec<String>>, AppError>;

    /// Replaces every topic of a repository, an empty slice removes them all
    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<Response<Vec<String>>, AppError>;

    /// Lists contributors sorted by number of commits
    async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&ListContributorsOptions>,
    ) -> Result<Response<Vec<Contributor>>, AppError>;
}
