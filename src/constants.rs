/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Default base URL of the public GitHub REST API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";
/// Default base URL used for uploads (release assets, SARIF files, ...)
pub const DEFAULT_UPLOAD_URL: &str = "https://uploads.github.com/";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("gh-client/", env!("CARGO_PKG_VERSION"));
/// REST API version sent in the `X-GitHub-Api-Version` header
pub const DEFAULT_API_VERSION: &str = "2022-11-28";
/// Media type requested for every JSON response
pub const MEDIA_TYPE_V3: &str = "application/vnd.github+json";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 30;
/// Default delay in seconds between retries when the server gives no hint
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
/// Primary rate limit of an authenticated user, per hour
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 5000;
/// Window of the primary rate limit, in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 3600;
/// Number of requests allowed back to back by the client-side limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 100;

/// Header carrying the request quota of the current window
pub const HEADER_RATE_LIMIT: &str = "x-ratelimit-limit";
/// Header carrying the remaining requests of the current window
pub const HEADER_RATE_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the number of requests already used in the current window
pub const HEADER_RATE_USED: &str = "x-ratelimit-used";
/// Header carrying the epoch second at which the window resets
pub const HEADER_RATE_RESET: &str = "x-ratelimit-reset";
/// Header naming the rate-limit category the request was counted against
pub const HEADER_RATE_RESOURCE: &str = "x-ratelimit-resource";
/// Header carrying the number of seconds to wait after a secondary limit
pub const HEADER_RETRY_AFTER: &str = "retry-after";
/// Header signalling that a one-time password is required
pub const HEADER_OTP: &str = "x-github-otp";
/// Header carrying the expiration date of the token used
pub const HEADER_TOKEN_EXPIRATION: &str = "github-authentication-token-expiration";
/// Header carrying the REST API version
pub const HEADER_API_VERSION: &str = "x-github-api-version";
