/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::issue::IssueService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{IssueListByRepoOptions, IssueListCommentsOptions, add_options};
use crate::model::requests::{IssueRequest, LockIssueOptions};
use crate::model::response::Response;
use crate::presentation::issue::{Issue, IssueComment};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl IssueService for Client {
    async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Response<Issue>, AppError> {
        debug!("Getting issue {}/{}#{}", owner, repo, number);
        self.get(&format!("repos/{owner}/{repo}/issues/{number}"))
            .await
    }

    async fn list_repository_issues(
        &self,
        owner: &str,
        repo: &str,
        opts: Option<&IssueListByRepoOptions>,
    ) -> Result<Response<Vec<Issue>>, AppError> {
        let path = add_options(&format!("repos/{owner}/{repo}/issues"), opts)?;
        let result: Response<Vec<Issue>> = self.get(&path).await?;
        debug!("Issues obtained: {} issues", result.data.len());
        Ok(result)
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &IssueRequest,
    ) -> Result<Response<Issue>, AppError> {
        info!("Creating issue in {}/{}", owner, repo);
        let result: Response<Issue> = self
            .post(&format!("repos/{owner}/{repo}/issues"), issue)
            .await?;
        debug!("Issue created: #{}", result.data.number.unwrap_or_default());
        Ok(result)
    }

    async fn edit_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        issue: &IssueRequest,
    ) -> Result<Response<Issue>, AppError> {
        info!("Editing issue {}/{}#{}", owner, repo, number);
        self.patch(&format!("repos/{owner}/{repo}/issues/{number}"), issue)
            .await
    }

    async fn lock_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&LockIssueOptions>,
    ) -> Result<Response<()>, AppError> {
        info!("Locking issue {}/{}#{}", owner, repo, number);
        self.request_empty(
            Method::PUT,
            &format!("repos/{owner}/{repo}/issues/{number}/lock"),
            opts,
        )
        .await
    }

    async fn unlock_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Unlocking issue {}/{}#{}", owner, repo, number);
        self.delete(&format!("repos/{owner}/{repo}/issues/{number}/lock"))
            .await
    }

    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&IssueListCommentsOptions>,
    ) -> Result<Response<Vec<IssueComment>>, AppError> {
        let path = add_options(
            &format!("repos/{owner}/{repo}/issues/{number}/comments"),
            opts,
        )?;
        self.get(&path).await
    }

    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        comment: &IssueComment,
    ) -> Result<Response<IssueComment>, AppError> {
        info!("Commenting on issue {}/{}#{}", owner, repo, number);
        self.post(
            &format!("repos/{owner}/{repo}/issues/{number}/comments"),
            comment,
        )
        .await
    }

    async fn edit_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        comment: &IssueComment,
    ) -> Result<Response<IssueComment>, AppError> {
        info!("Editing comment {} in {}/{}", comment_id, owner, repo);
        self.patch(
            &format!("repos/{owner}/{repo}/issues/comments/{comment_id}"),
            comment,
        )
        .await
    }

    async fn delete_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Response<()>, AppError> {
        info!("Deleting comment {} in {}/{}", comment_id, owner, repo);
        self.delete(&format!("repos/{owner}/{repo}/issues/comments/{comment_id}"))
            .await
    }
}
