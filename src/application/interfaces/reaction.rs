use crate::error::AppError;
use crate::model::options::ListReactionOptions;
use crate::model::response::Response;
use crate::presentation::reaction::{Reaction, ReactionContent};
use async_trait::async_trait;

/// Interface for the reaction service
#[async_trait]
pub trait ReactionService: Send + Sync {
    /// Lists the reactions to an issue
    async fn list_issue_reactions(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        opts: Option<&ListReactionOptions>,
    ) -> Result<Response<Vec<Reaction>>, AppError>;

    /// Reacts to an issue
    ///
    /// Reacting twice with the same content returns the existing reaction.
    async fn create_issue_reaction(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        content: ReactionContent,
    ) -> Result<Response<Reaction>, AppError>;

    /// Deletes a reaction to an issue
    async fn delete_issue_reaction(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reaction_id: u64,
    ) -> Result<Response<()>, AppError>;

    /// Lists the reactions to an issue comment
    async fn list_issue_comment_reactions(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        opts: Option<&ListReactionOptions>,
    ) -> Result<Response<Vec<Reaction>>, AppError>;

    /// Reacts to an issue comment
    async fn create_issue_comment_reaction(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        content: ReactionContent,
    ) -> Result<Response<Reaction>, AppError>;

    /// Deletes a reaction to an issue comment
    async fn delete_issue_comment_reaction(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response<()>, AppError>;
}
