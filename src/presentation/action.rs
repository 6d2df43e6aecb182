/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::Timestamp;
use crate::presentation::user::User;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A workflow defined in `.github/workflows`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the workflow file, e.g. `.github/workflows/ci.yml`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// `active`, `deleted`, `disabled_fork`, `disabled_inactivity` or `disabled_manually`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
}

/// A page of workflows
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Workflows {
    /// Total number of workflows in the repository
    #[serde(default)]
    pub total_count: u32,
    /// Workflows on this page
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

/// Commit a workflow run was triggered for
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HeadCommit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// A single execution of a workflow
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WorkflowRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_attempt: Option<u32>,
    /// Event that triggered the run, e.g. `push`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// `queued`, `in_progress`, `completed`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `success`, `failure`, `cancelled`, ... once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_suite_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggering_actor: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_commit: Option<HeadCommit>,
}

/// A page of workflow runs
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WorkflowRuns {
    /// Total number of runs matching the filters
    #[serde(default)]
    pub total_count: u32,
    /// Runs on this page
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}
