/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::reaction::ReactionService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{ListReactionOptions, add_options};
use crate::model::requests::ReactionRequest;
use crate::model::response::Response;
use crate::presentation::reaction::{Reaction, ReactionContent};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ReactionService for Client {
    async fn list_issue_reactions(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&ListReactionOptions>,
    ) -> Result<Response<Vec<Reaction>>, AppError> {
        let path = add_options(
            &format!("repos/{owner}/{repo}/issues/{number}/reactions"),
            opts,
        )?;
        let result: Response<Vec<Reaction>> = self.get(&path).await?;
        debug!("Reactions obtained: {} reactions", result.data.len());
        Ok(result)
    }

    async fn create_issue_reaction(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        content: ReactionContent,
    ) -> Result<Response<Reaction>, AppError> {
        info!("Reacting {} to {}/{}#{}", content, owner, repo, number);
        self.post(
            &format!("repos/{owner}/{repo}/issues/{number}/reactions"),
            &ReactionRequest { content },
        )
        .await
    }

    async fn delete_issue_reaction(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reaction_id: u64,
    ) -> Result<Response<()>, AppError> {
        self.delete(&format!(
            "repos/{owner}/{repo}/issues/{number}/reactions/{reaction_id}"
        ))
        .await
    }

    async fn list_issue_comment_reactions(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        opts: Option<&ListReactionOptions>,
    ) -> Result<Response<Vec<Reaction>>, AppError> {
        let path = add_options(
            &format!("repos/{owner}/{repo}/issues/comments/{comment_id}/reactions"),
            opts,
        )?;
        self.get(&path).await
    }

    async fn create_issue_comment_reaction(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        content: ReactionContent,
    ) -> Result<Response<Reaction>, AppError> {
        info!("Reacting {} to comment {} in {}/{}", content, comment_id, owner, repo);
        self.post(
            &format!("repos/{owner}/{repo}/issues/comments/{comment_id}/reactions"),
            &ReactionRequest { content },
        )
        .await
    }

    async fn delete_issue_comment_reaction(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response<()>, AppError> {
        self.delete(&format!(
            "repos/{owner}/{repo}/issues/comments/{comment_id}/reactions/{reaction_id}"
        ))
        .await
    }
}
