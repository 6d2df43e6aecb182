/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::reaction::ReactionContent;
use crate::presentation::serialization::{Timestamp, comma_separated};
use serde::{Deserialize, Serialize};

/// Offset based pagination parameters shared by most list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListOptions {
    /// Page of results to retrieve, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of results per page (maximum 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Creates options for a given page and page size
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Sets the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Cursor based pagination parameters
///
/// Some endpoints (code scanning, audit log, ...) paginate with opaque
/// cursors instead of page numbers; the cursors come from the `Link` header
/// and are exposed on [`crate::model::response::Response`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCursorOptions {
    /// Page of results, for endpoints accepting both styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of results per page (maximum 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Cursor to fetch results after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Cursor to fetch results before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Generic cursor used by a few endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Options for listing every user, in sign-up order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserListOptions {
    /// Only users with an id greater than this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Options for listing the repositories of a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryListOptions {
    /// `all`, `public` or `private`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Comma separated subset of `owner,collaborator,organization_member`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    /// `all`, `owner`, `public`, `private` or `member`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<String>,
    /// `created`, `updated`, `pushed` or `full_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing the repositories of an organization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryListByOrgOptions {
    /// `all`, `public`, `private`, `forks`, `sources` or `member`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing contributors
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListContributorsOptions {
    /// Include anonymous contributors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anon: Option<bool>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing the issues of a repository
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueListByRepoOptions {
    /// Milestone number, `*` for any or `none`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// `open`, `closed` or `all`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Login, `*` for any or `none`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<String>,
    /// Label names, sent comma separated
    #[serde(
        default,
        serialize_with = "comma_separated",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,
    /// `created`, `updated` or `comments`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Only issues updated at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<Timestamp>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing the comments of an issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueListCommentsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<Timestamp>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing workflow runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListWorkflowRunsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Date range in search syntax, e.g. `>=2024-01-01`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_pull_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_suite_id: Option<u64>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing the members of a team
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamListTeamMembersOptions {
    /// `member`, `maintainer` or `all`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing deployments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentsListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing environments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing reactions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListReactionOptions {
    /// Only reactions of this type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ReactionContent>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing code scanning alerts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertListOptions {
    /// `open`, `closed`, `dismissed` or `fixed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    /// `critical`, `high`, `medium`, `low`, `warning`, `note` or `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(flatten)]
    pub list_cursor: ListCursorOptions,
}

/// Options for listing code scanning analyses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysesListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sarif_id: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Appends the encoded fields of `opts` to the query string of `path`
///
/// Any query already present on `path` is preserved and the new pairs are
/// appended after it. `None` and option structs without set fields leave
/// `path` untouched.
///
/// # Errors
///
/// Returns [`AppError::Query`] if the options cannot be represented as a
/// flat query string (nested structs or sequences without a custom
/// serializer).
pub fn add_options<O: Serialize>(path: &str, opts: Option<&O>) -> Result<String, AppError> {
    let Some(opts) = opts else {
        return Ok(path.to_string());
    };

    let encoded = serde_urlencoded::to_string(opts)?;
    if encoded.is_empty() {
        return Ok(path.to_string());
    }

    let separator = match path.split_once('?') {
        None => "?",
        Some((_, query)) if query.is_empty() => "",
        Some(_) => "&",
    };
    Ok(format!("{path}{separator}{encoded}"))
}
