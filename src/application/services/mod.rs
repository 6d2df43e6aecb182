/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
//! Service implementations
//!
//! Every service trait is implemented directly on
//! [`crate::model::http::Client`], so a single client value exposes the
//! whole API once the traits are in scope.

/// GitHub Actions endpoints
pub mod action_service;
/// Code scanning endpoints
pub mod code_scanning_service;
/// Deployment endpoints
pub mod deployment_service;
/// Environment endpoints
pub mod environment_service;
/// Issue and issue comment endpoints
pub mod issue_service;
/// Reaction endpoints
pub mod reaction_service;
/// Repository endpoints
pub mod repository_service;
/// Team endpoints
pub mod team_service;
/// User and rate limit endpoints
pub mod user_service;

pub use crate::application::interfaces::action::ActionService;
pub use crate::application::interfaces::code_scanning::CodeScanningService;
pub use crate::application::interfaces::deployment::DeploymentService;
pub use crate::application::interfaces::environment::EnvironmentService;
pub use crate::application::interfaces::issue::IssueService;
pub use crate::application::interfaces::reaction::ReactionService;
pub use crate::application::interfaces::repository::RepositoryService;
pub use crate::application::interfaces::team::TeamService;
pub use crate::application::interfaces::user::UserService;
