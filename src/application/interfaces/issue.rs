use crate::error::AppError;
use crate::model::options::{IssueListByRepoOptions, IssueListCommentsOptions};
use crate::model::requests::{IssueRequest, LockIssueOptions};
use crate::model::response::Response;
use crate::presentation::issue::{Issue, IssueComment};
use async_trait::async_trait;

/// Interface for the issue service
#[async_trait]
pub trait IssueService: Send + Sync {
    /// Gets a single issue
    async fn get_issue(&self, owner: &str, repo: &str, number: u64)
    -> Result<Response<Issue>, AppError>;

    /// Lists the issues of a repository, pull requests included
    async fn list_repository_issues(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&IssueListByRepoOptions>,
    ) -> Result<Response<Vec<Issue>>, AppError>;

    /// Opens a new issue
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &IssueRequest,
    ) -> Result<Response<Issue>, AppError>;

    /// Edits an issue
    ///
    /// Only the fields set on `issue` change. Use
    /// [`IssueRequest::clear_milestone`] to detach the milestone.
    async fn edit_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        issue: &IssueRequest,
    ) -> Result<Response<Issue>, AppError>;

    /// Locks the conversation of an issue
    async fn lock_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&LockIssueOptions>,
    ) -> Result<Response<()>, AppError>;

    /// Unlocks the conversation of an issue
    async fn unlock_issue(&self, owner: &str, repo: &str, number: u64)
    -> Result<Response<()>, AppError>;

    /// Lists the comments of an issue
    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&IssueListCommentsOptions>,
    ) -> Result<Response<Vec<IssueComment>>, AppError>;

    /// Comments on an issue
    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        comment: &IssueComment,
    ) -> Result<Response<IssueComment>, AppError>;

    /// Edits a comment
    async fn edit_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        comment: &IssueComment,
    ) -> Result<Response<IssueComment>, AppError>;

    /// Deletes a comment
    async fn delete_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response<()>, AppError>;
}
