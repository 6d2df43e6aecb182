/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::Timestamp;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Which branches may deploy to an environment
///
/// Exactly one of the two flags should be `true`.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchPolicy {
    /// Only branches with branch protection rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_branches: Option<bool>,
    /// Only branches matching the environment's name patterns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_branch_policies: Option<bool>,
}

/// A user or team allowed to approve deployments
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct RequiredReviewer {
    /// `User` or `Team`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub reviewer_type: Option<String>,
    /// The user or team object, depending on `reviewer_type`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<serde_json::Value>,
}

/// A protection rule of an environment
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ProtectionRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// `required_reviewers`, `wait_timer` or `branch_policy`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    /// Minutes to wait before deploying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_timer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_self_review: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<RequiredReviewer>,
}

/// A deployment environment
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_admins_bypass: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protection_rules: Vec<ProtectionRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_branch_policy: Option<BranchPolicy>,
}

/// A page of environments
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct EnvResponse {
    /// Total number of environments in the repository
    #[serde(default)]
    pub total_count: u32,
    /// Environments on this page
    #[serde(default)]
    pub environments: Vec<Environment>,
}
