/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::team::TeamService;
use crate::error::AppError;
use crate::model::http::Client;
use crate::model::options::{ListOptions, TeamListTeamMembersOptions, add_options};
use crate::model::requests::{NewTeam, TeamAddTeamMembershipOptions};
use crate::model::response::Response;
use crate::presentation::team::{Team, TeamMembership};
use crate::presentation::user::User;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl TeamService for Client {
    async fn list_teams(
        &self,
        org: &str,
        opts: Option<&ListOptions>,
    ) -> Result<Response<Vec<Team>>, AppError> {
        let path = add_options(&format!("orgs/{org}/teams"), opts)?;
        let result: Response<Vec<Team>> = self.get(&path).await?;
        debug!("Teams of {} obtained: {} teams", org, result.data.len());
        Ok(result)
    }

    async fn get_team_by_slug(&self, org: &str, slug: &str) -> Result<Response<Team>, AppError> {
        self.get(&format!("orgs/{org}/teams/{slug}")).await
    }

    async fn create_team(&self, org: &str, team: &NewTeam) -> Result<Response<Team>, AppError> {
        info!("Creating team {} in {}", team.name, org);
        self.post(&format!("orgs/{org}/teams"), team).await
    }

    async fn edit_team_by_slug(
        &self,
        org: &str,
        slug: &str,
        team: &NewTeam,
        remove_parent: bool,
    ) -> Result<Response<Team>, AppError> {
        info!("Editing team {}/{}", org, slug);
        let path = format!("orgs/{org}/teams/{slug}");
        if remove_parent {
            let mut team = team.clone();
            team.parent_team_id = Some(None);
            return self.patch(&path, &team).await;
        }
        self.patch(&path, team).await
    }

    async fn delete_team_by_slug(&self, org: &str, slug: &str) -> Result<Response<()>, AppError> {
        info!("Deleting team {}/{}", org, slug);
        self.delete(&format!("orgs/{org}/teams/{slug}")).await
    }

    async fn list_team_members_by_slug(
        &self,
        org: &str,
        slug: &str,
        opts: Option<&TeamListTeamMembersOptions>,
    ) -> Result<Response<Vec<User>>, AppError> {
        let path = add_options(&format!("orgs/{org}/teams/{slug}/members"), opts)?;
        self.get(&path).await
    }

    async fn add_team_membership_by_slug(
        &self,
        org: &str,
        slug: &str,
        user: &str,
        opts: Option<&TeamAddTeamMembershipOptions>,
    ) -> Result<Response<TeamMembership>, AppError> {
        info!("Adding {} to team {}/{}", user, org, slug);
        let body = opts.cloned().unwrap_or_default();
        self.put(&format!("orgs/{org}/teams/{slug}/memberships/{user}"), &body)
            .await
    }

    async fn remove_team_membership_by_slug(
        &self,
        org: &str,
        slug: &str,
        user: &str,
    ) -> Result<Response<()>, AppError> {
        info!("Removing {} from team {}/{}", user, org, slug);
        self.delete(&format!("orgs/{org}/teams/{slug}/memberships/{user}"))
            .await
    }
}
