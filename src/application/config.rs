use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPLOAD_URL, USER_AGENT,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_first_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the GitHub API
pub struct Credentials {
    /// Personal access token, fine-grained token or app installation token
    ///
    /// Never serialized, so it does not leak through `Display`/`Debug`.
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the GitHub API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client-side rate limiter configuration
    pub rate_limiter: RateLimiterConfig,
    /// Retry policy for secondary rate limits
    pub retry: RetryConfig,
    /// Number of items per page used by helpers that page through results
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, must end with a slash
    pub base_url: String,
    /// Base URL used for uploads, must end with a slash
    pub upload_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
    /// Value of the `X-GitHub-Api-Version` header
    pub api_version: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the client-side rate limiter
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first. See the
    /// variables read in the crate documentation; every one of them has a
    /// default, so an empty environment yields an unauthenticated client
    /// for `https://api.github.com/`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_first_env(&["GITHUB_TOKEN", "GH_TOKEN"]);
        if token.is_none() {
            warn!("GITHUB_TOKEN not found in environment variables or .env file, requests will be unauthenticated");
        }

        let defaults = RestApiConfig::default();
        let limiter = RateLimiterConfig::default();

        Config {
            credentials: Credentials { token },
            rest_api: RestApiConfig {
                base_url: ensure_trailing_slash(&get_env_or_default(
                    "GITHUB_API_URL",
                    defaults.base_url,
                )),
                upload_url: ensure_trailing_slash(&get_env_or_default(
                    "GITHUB_UPLOAD_URL",
                    defaults.upload_url,
                )),
                timeout: get_env_or_default("GH_REST_TIMEOUT", defaults.timeout),
                user_agent: get_env_or_default("GH_USER_AGENT", defaults.user_agent),
                api_version: get_env_or_default("GH_API_VERSION", defaults.api_version),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "GH_RATE_LIMIT_MAX_REQUESTS",
                    limiter.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "GH_RATE_LIMIT_PERIOD_SECONDS",
                    limiter.period_seconds,
                ),
                burst_size: get_env_or_default("GH_RATE_LIMIT_BURST_SIZE", limiter.burst_size),
            },
            retry: RetryConfig::default(),
            page_size: get_env_or_default("GH_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration that ignores the environment
    ///
    /// Useful for tests and for applications managing their own settings.
    #[must_use]
    pub fn from_defaults() -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
            retry: RetryConfig::disabled(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the token used to authenticate
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.token = Some(token.into());
        self
    }

    /// Sets the base URL of the REST API, as is
    ///
    /// The URL is not normalized: a base URL without a trailing slash is
    /// rejected when the first request is built.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the upload URL, as is
    #[must_use]
    pub fn with_upload_url(mut self, upload_url: impl Into<String>) -> Self {
        self.rest_api.upload_url = upload_url.into();
        self
    }

    /// Points the client at a GitHub Enterprise Server instance
    ///
    /// `base_url` gets `api/v3/` appended and `upload_url` gets
    /// `api/uploads/` appended, unless they already end with them. Passing
    /// the same host for both is the common case.
    #[must_use]
    pub fn with_enterprise_urls(mut self, base_url: &str, upload_url: &str) -> Self {
        self.rest_api.base_url = enterprise_url(base_url, "api/v3/");
        self.rest_api.upload_url = enterprise_url(upload_url, "api/uploads/");
        self
    }

    /// Sets the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the client-side rate limiter configuration
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }
}

fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

fn enterprise_url(url: &str, suffix: &str) -> String {
    let url = ensure_trailing_slash(url);
    if url.ends_with(suffix) {
        url
    } else {
        format!("{url}{suffix}")
    }
}
