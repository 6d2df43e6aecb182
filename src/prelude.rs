/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # gh-client Prelude
//!
//! Brings the client, its configuration, every service trait and the data
//! types they exchange into scope with a single import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gh_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! let issues = client
//!     .list_repository_issues("rust-lang", "rust", None)
//!     .await?;
//! println!("{} issues on the first page", issues.data.len());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the GitHub API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Retry policy for secondary rate limits
pub use crate::model::retry::RetryConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library and the API error payloads it wraps
pub use crate::error::{
    AbuseRateLimitError, AppError, ErrorBlock, ErrorDetail, ErrorResponse, RateLimitError,
};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client every service is implemented on
pub use crate::model::http::Client;

/// Response wrapper with pagination and rate metadata
pub use crate::model::response::Response;

/// Rate-limit tracking
pub use crate::model::rate::{Rate, RateLimitCategory, RateLimits};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits, implemented on [`Client`]
pub use crate::application::services::{
    ActionService, CodeScanningService, DeploymentService, EnvironmentService, IssueService,
    ReactionService, RepositoryService, TeamService, UserService,
};

// ============================================================================
// REQUEST OPTIONS AND BODIES
// ============================================================================

/// Query options of list endpoints
pub use crate::model::options::{
    AlertListOptions, AnalysesListOptions, DeploymentsListOptions, EnvironmentListOptions,
    IssueListByRepoOptions, IssueListCommentsOptions, ListContributorsOptions,
    ListCursorOptions, ListOptions, ListReactionOptions, ListWorkflowRunsOptions,
    RepositoryListByOrgOptions, RepositoryListOptions, TeamListTeamMembersOptions,
    UserListOptions, add_options,
};

/// Request bodies
pub use crate::model::requests::{
    CodeScanningAlertState, CreateUpdateEnvironment, CreateWorkflowDispatchEventRequest,
    DeploymentRequest, DeploymentStatusRequest, EnvReviewers, IssueRequest, LockIssueOptions,
    NewTeam, SarifAnalysis, TeamAddTeamMembershipOptions,
};

// ============================================================================
// PRESENTATION MODELS
// ============================================================================

/// Actions models
pub use crate::presentation::action::{Workflow, WorkflowRun, WorkflowRuns, Workflows};
/// Code scanning models
pub use crate::presentation::code_scanning::{
    Alert, Location, Message, MostRecentInstance, Rule, SarifId, ScanningAnalysis, Tool,
};
/// Deployment models
pub use crate::presentation::deployment::{Deployment, DeploymentStatus};
/// Environment models
pub use crate::presentation::environment::{
    BranchPolicy, EnvResponse, Environment, ProtectionRule, RequiredReviewer,
};
/// Issue models
pub use crate::presentation::issue::{Issue, IssueComment, Label, Milestone};
/// Reaction models
pub use crate::presentation::reaction::{Reaction, ReactionContent, Reactions};
/// Repository models
pub use crate::presentation::repository::{Contributor, Repository, Topics};
/// Team models
pub use crate::presentation::team::{Team, TeamMembership};
/// User models
pub use crate::presentation::user::User;
/// Serialization utilities
pub use crate::presentation::serialization::Timestamp;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
