/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types returned by every client operation
//!
//! Transport, encoding and decoding failures are wrapped as they are. Non
//! successful HTTP responses are classified into [`ErrorResponse`],
//! [`RateLimitError`] (primary quota exhausted) and [`AbuseRateLimitError`]
//! (secondary limits), so callers can decide whether to wait or give up.

use crate::model::rate::Rate;
use crate::presentation::serialization::Timestamp;
use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::time::Duration;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The request could not be sent or the response could not be read
    Network(reqwest::Error),
    /// I/O failure
    Io(io::Error),
    /// A body could not be encoded or decoded as JSON
    Json(serde_json::Error),
    /// A URL could not be parsed or resolved
    Url(url::ParseError),
    /// Options could not be encoded into a query string
    Query(serde_urlencoded::ser::Error),
    /// The API answered with an error status
    Api(ErrorResponse),
    /// The API requires a one-time password for this request
    TwoFactorRequired(ErrorResponse),
    /// The primary rate limit is exhausted
    RateLimit(RateLimitError),
    /// A secondary rate limit was triggered
    AbuseRateLimit(AbuseRateLimitError),
    /// HTTP 202: the server scheduled a job and the result is not ready yet
    Accepted {
        /// Raw body returned along with the 202
        raw: String,
    },
    /// The caller supplied invalid input
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status of the response that produced this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api(e) | AppError::TwoFactorRequired(e) => Some(e.status),
            AppError::RateLimit(e) => Some(e.response.status),
            AppError::AbuseRateLimit(e) => Some(e.response.status),
            AppError::Accepted { .. } => Some(StatusCode::ACCEPTED),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the resource does not exist or is not visible with the current token
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the error is one of the two rate-limit classes
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::RateLimit(_) | AppError::AbuseRateLimit(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Url(e) => write!(f, "invalid url: {e}"),
            AppError::Query(e) => write!(f, "query encoding error: {e}"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::TwoFactorRequired(e) => {
                write!(f, "two-factor authentication required: {}", e.message)
            }
            AppError::RateLimit(e) => write!(f, "{e}"),
            AppError::AbuseRateLimit(e) => write!(f, "{e}"),
            AppError::Accepted { .. } => {
                write!(f, "job scheduled on GitHub side; try again later")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Url(e) => Some(e),
            AppError::Query(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        AppError::Url(error)
    }
}

impl From<serde_urlencoded::ser::Error> for AppError {
    fn from(error: serde_urlencoded::ser::Error) -> Self {
        AppError::Query(error)
    }
}

/// Error payload returned by the API for unsuccessful requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip, default = "default_status")]
    pub status: StatusCode,
    /// HTTP method of the request that failed
    #[serde(skip)]
    pub method: String,
    /// URL of the request that failed
    #[serde(skip)]
    pub url: String,
    /// Error message
    #[serde(default)]
    pub message: String,
    /// Detailed, per-field errors
    #[serde(
        default,
        deserialize_with = "crate::presentation::serialization::null_as_empty_vec"
    )]
    pub errors: Vec<ErrorDetail>,
    /// Block information, present on HTTP 451 responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<ErrorBlock>,
    /// Link to the documentation of the failing endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl ErrorResponse {
    /// Builds an error response with a bare message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            method: String::new(),
            url: String::new(),
            message: message.into(),
            errors: Vec::new(),
            block: None,
            documentation_url: None,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.method.is_empty() || !self.url.is_empty() {
            write!(f, "{} {}: ", self.method, self.url)?;
        }
        write!(f, "{} {}", self.status.as_u16(), self.message)?;
        if !self.errors.is_empty() {
            let details: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            write!(f, " [{}]", details.join("; "))?;
        }
        Ok(())
    }
}

/// Detail of a single validation error
///
/// The API reports these either as objects or, for some endpoints, as bare
/// strings; both forms are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawErrorDetail")]
pub struct ErrorDetail {
    /// Resource on which the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Field on which the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Validation error code, e.g. `missing_field` or `already_exists`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human readable message, used with the `custom` code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawErrorDetail {
    Message(String),
    Detail {
        #[serde(default)]
        resource: Option<String>,
        #[serde(default)]
        field: Option<String>,
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl From<RawErrorDetail> for ErrorDetail {
    fn from(raw: RawErrorDetail) -> Self {
        match raw {
            RawErrorDetail::Message(message) => ErrorDetail {
                message: Some(message),
                ..Default::default()
            },
            RawErrorDetail::Detail {
                resource,
                field,
                code,
                message,
            } => ErrorDetail {
                resource,
                field,
                code,
                message,
            },
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.resource, &self.field, &self.code) {
            (None, None, None) => write!(f, "{}", self.message.as_deref().unwrap_or_default()),
            _ => {
                write!(
                    f,
                    "{} error caused by {} field on {} resource",
                    self.code.as_deref().unwrap_or("unknown"),
                    self.field.as_deref().unwrap_or("unknown"),
                    self.resource.as_deref().unwrap_or("unknown"),
                )?;
                if let Some(message) = &self.message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}

/// Reason and date of a legal block (HTTP 451)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBlock {
    /// Reason for the block, e.g. `dmca`
    pub reason: String,
    /// When the block was put in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// The primary rate limit of a category is exhausted
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitError {
    /// Rate observed when the limit was hit
    pub rate: Rate,
    /// The response that carried the error
    pub response: ErrorResponse,
    /// Error message
    pub message: String,
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reset = self.rate.reset.0 - Utc::now();
        let secs = reset.num_seconds();
        if secs >= 0 {
            write!(f, "{} [rate reset in {}s]", self.message, secs)
        } else {
            write!(f, "{} [rate limit was reset {}s ago]", self.message, -secs)
        }
    }
}

/// A secondary ("abuse") rate limit was triggered
#[derive(Debug, Clone, PartialEq)]
pub struct AbuseRateLimitError {
    /// The response that carried the error
    pub response: ErrorResponse,
    /// Error message
    pub message: String,
    /// How long to wait before retrying, when the server said so
    pub retry_after: Option<Duration>,
}

impl fmt::Display for AbuseRateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(retry_after) = self.retry_after {
            write!(f, " [retry after {}s]", retry_after.as_secs())?;
        }
        Ok(())
    }
}
