use crate::error::AppError;
use crate::model::options::{ListOptions, TeamListTeamMembersOptions};
use crate::model::requests::{NewTeam, TeamAddTeamMembershipOptions};
use crate::model::response::Response;
use crate::presentation::team::{Team, TeamMembership};
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the team service
#[async_trait]
pub trait TeamService: Send + Sync {
    /// Lists the teams of an organization visible to the authenticated user
    async fn list_teams(
        &self,
        org: &str,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Vec<Team>>, AppError>;

    /// Gets a team by slug
    async fn get_team_by_slug(&self, org: &str, slug: &str) -> Result<Response<Team>, AppError>;

    /// Creates a team
    async fn create_team(&self, org: &str, team: &NewTeam) -> Result<Response<Team>, AppError>;

    /// Edits a team
    ///
    /// When `remove_parent` is true the team is detached from its parent,
    /// whatever `team.parent_team_id` holds.
    async fn edit_team_by_slug(
        &self,
        org: &str,
        slug: &str,
        team: &NewTeam,
        remove_parent: bool,
    ) -> Result<Response<Team>, AppError>;

    /// Deletes a team and its child teams
    async fn delete_team_by_slug(&self, org: &str, slug: &str) -> Result<Response<()>, AppError>;

    /// Lists the members of a team
    async fn list_team_members_by_slug(
        &self,
        org: &str,
        slug: &str,
        opts: Option<&TeamListTeamMembersOptions>,
    ) -> Result<Response<Vec<User>>, AppError>;

    /// Adds or updates the membership of `user`
    async fn add_team_membership_by_slug(
        &self,
        org: &str,
        slug: &str,
        user: &str,
        opts: Option<&TeamAddTeamMembershipOptions>,
    ) -> Result<Response<TeamMembership>, AppError>;

    /// Removes `user` from a team
    async fn remove_team_membership_by_slug(
        &self,
        org: &str,
        slug: &str,
        user: &str,
    ) -> Result<Response<()>, AppError>;
}
