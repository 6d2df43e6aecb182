/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Rate-limit bookkeeping
//!
//! Every response carries `X-RateLimit-*` headers describing the quota of
//! the category the request was counted against. The client keeps the last
//! [`Rate`] seen per [`RateLimitCategory`] so it can refuse to send requests
//! that are certain to be rejected.

use crate::constants::{
    HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET, HEADER_RATE_RESOURCE,
    HEADER_RATE_USED,
};
use crate::presentation::serialization::Timestamp;
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Quota of a rate-limit category
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rate {
    /// Number of requests allowed per window
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// Requests already made in the current window
    #[serde(default)]
    pub used: u32,
    /// When the current window resets
    pub reset: Timestamp,
    /// Category name as reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl Rate {
    /// Parses the rate headers of a response
    ///
    /// Returns `None` when the limit header is missing, which is the case for
    /// endpoints that are not rate limited.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Rate> {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        let limit = header(HEADER_RATE_LIMIT)?.trim().parse::<u32>().ok()?;
        let remaining = header(HEADER_RATE_REMAINING)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or_default();
        let used = header(HEADER_RATE_USED)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or_default();
        let reset = header(HEADER_RATE_RESET)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .and_then(Timestamp::from_unix)
            .unwrap_or_default();
        let resource = header(HEADER_RATE_RESOURCE).map(str::to_string);

        Some(Rate {
            limit,
            remaining,
            used,
            reset,
            resource,
        })
    }

    /// Whether the quota is exhausted and the window has not reset yet
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0 && self.reset > Timestamp::now()
    }
}

/// Rate limit categories tracked by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitCategory {
    /// Everything not covered by another category
    Core,
    /// Search endpoints other than code search
    Search,
    /// GraphQL API
    #[serde(rename = "graphql")]
    GraphQL,
    /// App manifest conversions
    IntegrationManifest,
    /// Source imports
    SourceImport,
    /// SARIF uploads
    CodeScanningUpload,
    /// Self-hosted runner registration tokens
    ActionsRunnerRegistration,
    /// SCIM provisioning
    Scim,
    /// Dependency graph snapshot submissions
    DependencySnapshots,
    /// Code search
    CodeSearch,
    /// Audit log queries
    AuditLog,
}

impl RateLimitCategory {
    /// Finds the category a request will be counted against
    ///
    /// `path` is the URL path, with or without a leading slash. Prefixes
    /// such as `api/v3/` on enterprise servers are tolerated.
    #[must_use]
    pub fn for_request(method: &Method, path: &str) -> RateLimitCategory {
        let path = path.trim_start_matches('/');
        let path = path.strip_prefix("api/v3/").unwrap_or(path);
        let is_post = *method == Method::POST;

        if path.starts_with("search/code") {
            return RateLimitCategory::CodeSearch;
        }
        if path.starts_with("search/") {
            return RateLimitCategory::Search;
        }
        if path.starts_with("graphql") {
            return RateLimitCategory::GraphQL;
        }
        if is_post && path.starts_with("app-manifests/") && path.ends_with("/conversions") {
            return RateLimitCategory::IntegrationManifest;
        }

        let segments: Vec<&str> = path.split('/').collect();
        let is_repo = segments.first() == Some(&"repos") && segments.len() > 3;
        if is_repo {
            let rest = segments[3..].join("/");
            if rest == "import" || rest.starts_with("import/") {
                return RateLimitCategory::SourceImport;
            }
            if is_post && rest == "code-scanning/sarifs" {
                return RateLimitCategory::CodeScanningUpload;
            }
            if is_post && rest == "dependency-graph/snapshots" {
                return RateLimitCategory::DependencySnapshots;
            }
        }
        if is_post && path.ends_with("actions/runners/registration-token") {
            return RateLimitCategory::ActionsRunnerRegistration;
        }
        if path.starts_with("scim/") {
            return RateLimitCategory::Scim;
        }
        if path.ends_with("audit-log") {
            return RateLimitCategory::AuditLog;
        }
        RateLimitCategory::Core
    }

    /// Parses the value of the `X-RateLimit-Resource` header
    #[must_use]
    pub fn from_resource(resource: &str) -> Option<RateLimitCategory> {
        serde_json::from_value(serde_json::Value::String(resource.to_string())).ok()
    }
}

/// Body of the `rate_limit` endpoint: one quota per category
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimits {
    /// Core REST quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<Rate>,
    /// Search quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Rate>,
    /// GraphQL quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<Rate>,
    /// App manifest conversions quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_manifest: Option<Rate>,
    /// Source import quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_import: Option<Rate>,
    /// SARIF upload quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_scanning_upload: Option<Rate>,
    /// Runner registration quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions_runner_registration: Option<Rate>,
    /// SCIM quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scim: Option<Rate>,
    /// Dependency snapshot quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_snapshots: Option<Rate>,
    /// Code search quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_search: Option<Rate>,
    /// Audit log quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<Rate>,
}

impl RateLimits {
    /// Pairs every present quota with its category
    #[must_use]
    pub fn by_category(&self) -> Vec<(RateLimitCategory, Rate)> {
        [
            (RateLimitCategory::Core, &self.core),
            (RateLimitCategory::Search, &self.search),
            (RateLimitCategory::GraphQL, &self.graphql),
            (
                RateLimitCategory::IntegrationManifest,
                &self.integration_manifest,
            ),
            (RateLimitCategory::SourceImport, &self.source_import),
            (
                RateLimitCategory::CodeScanningUpload,
                &self.code_scanning_upload,
            ),
            (
                RateLimitCategory::ActionsRunnerRegistration,
                &self.actions_runner_registration,
            ),
            (RateLimitCategory::Scim, &self.scim),
            (
                RateLimitCategory::DependencySnapshots,
                &self.dependency_snapshots,
            ),
            (RateLimitCategory::CodeSearch, &self.code_search),
            (RateLimitCategory::AuditLog, &self.audit_log),
        ]
        .into_iter()
        .filter_map(|(category, rate)| rate.clone().map(|r| (category, r)))
        .collect()
    }
}

/// Wrapper of the `rate_limit` endpoint body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RateLimitsResponse {
    #[serde(default)]
    pub resources: RateLimits,
}
