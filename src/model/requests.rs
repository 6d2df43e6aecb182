/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::environment::BranchPolicy;
use crate::presentation::reaction::ReactionContent;
use crate::presentation::serialization::{Timestamp, double_option};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body used to create or edit an issue
///
/// Unset fields are left out so edits only touch what is given.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct IssueRequest {
    /// Issue title, required on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Label names, replaces every label on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Single assignee login (deprecated by the API in favor of `assignees`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Assignee logins, replaces every assignee on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    /// `open` or `closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// `completed`, `not_planned` or `reopened`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    /// Milestone number; `Some(None)` removes the milestone
    #[serde(
        default,
        with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub milestone: Option<Option<u64>>,
}

impl IssueRequest {
    /// Creates a request with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Sets the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the labels
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the assignees
    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    /// Sets the state
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the milestone
    pub fn with_milestone(mut self, milestone: u64) -> Self {
        self.milestone = Some(Some(milestone));
        self
    }

    /// Removes the milestone from the issue
    pub fn clear_milestone(mut self) -> Self {
        self.milestone = Some(None);
        self
    }
}

/// Reason given when locking an issue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockIssueOptions {
    /// `off-topic`, `too heated`, `resolved` or `spam`
    pub lock_reason: String,
}

/// Body used to create or edit a team
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct NewTeam {
    /// Team name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logins of the team maintainers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,
    /// Full names (`org/repo`) of repositories to add to the team
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repo_names: Vec<String>,
    /// Parent team id; `Some(None)` detaches the team from its parent
    #[serde(
        default,
        with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_team_id: Option<Option<u64>>,
    /// `notifications_enabled` or `notifications_disabled`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_setting: Option<String>,
    /// Deprecated default permission, `pull` or `push`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// `secret` or `closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    /// LDAP distinguished name, Enterprise Server only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_dn: Option<String>,
}

impl NewTeam {
    /// Creates a team body with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the privacy
    pub fn with_privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }

    /// Sets the parent team
    pub fn with_parent(mut self, parent_team_id: u64) -> Self {
        self.parent_team_id = Some(Some(parent_team_id));
        self
    }
}

/// Role given when adding a user to a team
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamAddTeamMembershipOptions {
    /// `member` (default) or `maintainer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body used to create a deployment
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DeploymentRequest {
    /// Branch, tag or SHA to deploy
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    /// e.g. `deploy` or `deploy:migrations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Merge the default branch into `ref` first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_merge: Option<bool>,
    /// Status contexts to verify; `Some(vec![])` skips every check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_contexts: Option<Vec<String>>,
    /// Arbitrary JSON made available to the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transient_environment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_environment: Option<bool>,
}

impl DeploymentRequest {
    /// Creates a deployment of `git_ref`
    pub fn new(git_ref: impl Into<String>) -> Self {
        Self {
            git_ref: Some(git_ref.into()),
            ..Default::default()
        }
    }

    /// Sets the target environment
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the required status contexts, an empty list bypasses them
    pub fn with_required_contexts(mut self, contexts: Vec<String>) -> Self {
        self.required_contexts = Some(contexts);
        self
    }
}

/// Body used to create a deployment status
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentStatusRequest {
    /// `error`, `failure`, `inactive`, `in_progress`, `queued`, `pending` or `success`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
    /// Mark previous non-transient deployments of the environment as inactive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_inactive: Option<bool>,
}

impl DeploymentStatusRequest {
    /// Creates a status with a state
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..Default::default()
        }
    }
}

/// Reviewer allowed to approve deployments to an environment
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvReviewers {
    /// `User` or `Team`
    #[serde(rename = "type")]
    pub reviewer_type: String,
    /// Id of the user or team
    pub id: u64,
}

/// Body used to create or update an environment
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateUpdateEnvironment {
    /// Minutes to wait before allowing deployments, 0 to 43200
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<EnvReviewers>>,
    /// `Some(None)` lets every branch deploy
    #[serde(
        default,
        with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deployment_branch_policy: Option<Option<BranchPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_admins_bypass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_self_review: Option<bool>,
}

/// Body used to trigger a `workflow_dispatch` event
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateWorkflowDispatchEventRequest {
    /// Branch or tag the workflow runs on
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Workflow inputs, at most ten
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub inputs: Map<String, Value>,
}

impl CreateWorkflowDispatchEventRequest {
    /// Creates a dispatch for `git_ref` without inputs
    pub fn new(git_ref: impl Into<String>) -> Self {
        Self {
            git_ref: git_ref.into(),
            inputs: Map::new(),
        }
    }

    /// Adds an input
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }
}

/// Body used to change the state of a code scanning alert
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeScanningAlertState {
    /// `open` or `dismissed`
    pub state: String,
    /// `false positive`, `won't fix` or `used in tests`; required to dismiss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissed_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissed_comment: Option<String>,
}

impl CodeScanningAlertState {
    /// Reopens an alert
    pub fn open() -> Self {
        Self {
            state: "open".to_string(),
            dismissed_reason: None,
            dismissed_comment: None,
        }
    }

    /// Dismisses an alert for `reason`
    pub fn dismissed(reason: impl Into<String>) -> Self {
        Self {
            state: "dismissed".to_string(),
            dismissed_reason: Some(reason.into()),
            dismissed_comment: None,
        }
    }

    /// Sets the dismissal comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.dismissed_comment = Some(comment.into());
        self
    }

    /// Checks that a dismissal carries its reason
    ///
    /// # Errors
    /// `AppError::InvalidInput` when `state` is `dismissed` without a reason
    pub fn validate(&self) -> Result<(), AppError> {
        let has_reason = self
            .dismissed_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty());
        if self.state == "dismissed" && !has_reason {
            return Err(AppError::InvalidInput(
                "dismissed_reason is required when dismissing a code scanning alert".to_string(),
            ));
        }
        Ok(())
    }
}

/// A SARIF upload
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SarifAnalysis {
    /// Commit the analysis ran on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    /// Full ref, e.g. `refs/heads/main`
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    /// SARIF document, gzip compressed then base64 encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sarif: Option<String>,
    /// Base URI of the checkout, used to relativize paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
}

/// Body used to add a reaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionRequest {
    /// Reaction to add
    pub content: ReactionContent,
}
