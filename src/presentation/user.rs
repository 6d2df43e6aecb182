use crate::presentation::serialization::Timestamp;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A GitHub user or organization account
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Numeric identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// GraphQL node identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Profile page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// API URL of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `User`, `Organization` or `Bot`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Whether the account is a site administrator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Blog or website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Public email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Number of public repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u32>,
    /// Number of followers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u32>,
    /// Number of followed accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u32>,
    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
