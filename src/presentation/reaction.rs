/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::serialization::Timestamp;
use crate::presentation::user::User;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reaction a user can leave on issues, comments and releases
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReactionContent {
    /// Thumbs up
    #[serde(rename = "+1")]
    PlusOne,
    /// Thumbs down
    #[serde(rename = "-1")]
    MinusOne,
    /// Laugh
    #[serde(rename = "laugh")]
    Laugh,
    /// Confused
    #[serde(rename = "confused")]
    Confused,
    /// Heart
    #[serde(rename = "heart")]
    Heart,
    /// Hooray
    #[serde(rename = "hooray")]
    Hooray,
    /// Rocket
    #[serde(rename = "rocket")]
    Rocket,
    /// Eyes
    #[serde(rename = "eyes")]
    Eyes,
}

impl ReactionContent {
    /// Wire value of the reaction
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionContent::PlusOne => "+1",
            ReactionContent::MinusOne => "-1",
            ReactionContent::Laugh => "laugh",
            ReactionContent::Confused => "confused",
            ReactionContent::Heart => "heart",
            ReactionContent::Hooray => "hooray",
            ReactionContent::Rocket => "rocket",
            ReactionContent::Eyes => "eyes",
        }
    }
}

impl fmt::Display for ReactionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionContent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+1" => Ok(ReactionContent::PlusOne),
            "-1" => Ok(ReactionContent::MinusOne),
            "laugh" => Ok(ReactionContent::Laugh),
            "confused" => Ok(ReactionContent::Confused),
            "heart" => Ok(ReactionContent::Heart),
            "hooray" => Ok(ReactionContent::Hooray),
            "rocket" => Ok(ReactionContent::Rocket),
            "eyes" => Ok(ReactionContent::Eyes),
            other => Err(AppError::InvalidInput(format!(
                "unknown reaction content {other:?}, expected one of +1, -1, laugh, confused, heart, hooray, rocket, eyes"
            ))),
        }
    }
}

/// A single reaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    /// Numeric identifier
    pub id: u64,
    /// GraphQL node identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Author of the reaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Reaction type
    pub content: ReactionContent,
    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Reaction counters embedded in issues and comments
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reactions {
    /// Total number of reactions
    #[serde(default)]
    pub total_count: u32,
    /// Thumbs up count
    #[serde(rename = "+1", default)]
    pub plus_one: u32,
    /// Thumbs down count
    #[serde(rename = "-1", default)]
    pub minus_one: u32,
    /// Laugh count
    #[serde(default)]
    pub laugh: u32,
    /// Confused count
    #[serde(default)]
    pub confused: u32,
    /// Heart count
    #[serde(default)]
    pub heart: u32,
    /// Hooray count
    #[serde(default)]
    pub hooray: u32,
    /// Rocket count
    #[serde(default)]
    pub rocket: u32,
    /// Eyes count
    #[serde(default)]
    pub eyes: u32,
    /// API URL listing the reactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
