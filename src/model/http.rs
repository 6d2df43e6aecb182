/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! HTTP plumbing shared by every service
//!
//! [`Client`] owns the pooled `reqwest` client, the configuration, the
//! client-side limiter and the last rate-limit state seen per category.
//! Services only build a path and a body; everything else (URL resolution,
//! headers, throttling, retries, error classification and decoding) happens
//! here.

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{
    HEADER_API_VERSION, HEADER_OTP, HEADER_RATE_REMAINING, HEADER_RATE_RESET, HEADER_RETRY_AFTER,
    MEDIA_TYPE_V3,
};
use crate::error::{AbuseRateLimitError, AppError, ErrorResponse, RateLimitError};
use crate::model::options::ListOptions;
use crate::model::rate::{Rate, RateLimitCategory};
use crate::model::response::Response;
use crate::presentation::serialization::Timestamp;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Client as HttpInternalClient, Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Client for the GitHub REST API
///
/// Cheap to clone: clones share the connection pool, the limiter and the
/// rate-limit table. Endpoint methods come from the service traits in
/// [`crate::application::interfaces`], which are all implemented on this
/// type.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    base_url: Url,
    upload_url: Url,
    rate_limiter: RateLimiter,
    rate_limits: Arc<RwLock<HashMap<RateLimitCategory, Rate>>>,
}

impl Client {
    /// Creates a new client
    ///
    /// No request is made; an invalid token is only detected on first use.
    ///
    /// # Errors
    /// * `AppError::Url` if the base or upload URL cannot be parsed
    /// * `AppError::Network` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url)?;
        let upload_url = Url::parse(&config.rest_api.upload_url)?;

        let http_client = HttpInternalClient::builder()
            .user_agent(config.rest_api.user_agent.as_str())
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        debug!(
            base_url = %base_url,
            authenticated = config.credentials.token.is_some(),
            "created GitHub client"
        );

        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url,
            upload_url,
            rate_limiter,
            rate_limits: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL upload requests are resolved against
    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a token is attached to requests
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.config.credentials.token.is_some()
    }

    /// Last rate observed for a category, if any request of that category was made
    pub fn rate_limit(&self, category: RateLimitCategory) -> Option<Rate> {
        self.rate_limits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&category)
            .cloned()
    }

    pub(crate) fn store_rate(&self, category: RateLimitCategory, rate: Rate) {
        self.rate_limits
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(category, rate);
    }

    /// Builds a request for `path`, resolved against the base URL
    ///
    /// `path` should not start with a slash; one is tolerated and stripped.
    /// Absolute URLs are used as they are. When `body` is given it is
    /// encoded as JSON.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` if the base URL has no trailing slash
    /// * `AppError::Json` if the body cannot be encoded
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        let url = resolve(&self.base_url, "base", path)?;
        let mut builder = self.http_client.request(method, url);
        builder = self.add_default_headers(builder);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Builds an upload request for `path`, resolved against the upload URL
    ///
    /// # Errors
    /// * `AppError::InvalidInput` if the upload URL has no trailing slash
    pub fn new_upload_request(
        &self,
        path: &str,
        data: Vec<u8>,
        media_type: &str,
    ) -> Result<Request, AppError> {
        let url = resolve(&self.upload_url, "upload", path)?;
        let builder = self
            .add_default_headers(self.http_client.request(Method::POST, url))
            .header(CONTENT_TYPE, media_type)
            .body(data);
        Ok(builder.build()?)
    }

    fn add_default_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header(ACCEPT, MEDIA_TYPE_V3)
            .header(HEADER_API_VERSION, self.config.rest_api.api_version.as_str());
        match &self.config.credentials.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Makes a GET request and decodes the body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request and decodes the body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response<T>, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request and decodes the body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response<T>, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request and decodes the body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response<T>, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request, ignoring the body
    pub async fn delete(&self, path: &str) -> Result<Response<()>, AppError> {
        self.request_empty(Method::DELETE, path, None::<&()>).await
    }

    /// Builds, sends and decodes a request
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response<T>, AppError> {
        let request = self.new_request(method, path, body)?;
        self.execute(request).await
    }

    /// Builds and sends a request whose response body is not needed
    pub async fn request_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response<()>, AppError> {
        let request = self.new_request(method, path, body)?;
        self.execute_empty(request).await
    }

    /// Sends a request and decodes its JSON body into `T`
    ///
    /// An empty body (e.g. 204) is decoded as `null`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Response<T>, AppError> {
        let (meta, body) = self.send(request, SendOptions::default()).await?;
        let data = decode_body(&body)?;
        Ok(meta.with_data(data))
    }

    /// Sends a request and discards its body
    pub async fn execute_empty(&self, request: Request) -> Result<Response<()>, AppError> {
        let (meta, _) = self.send(request, SendOptions::default()).await?;
        Ok(meta)
    }

    /// Sends a request for which `202 Accepted` is the expected outcome
    ///
    /// The body of a 202 is decoded like any other success instead of being
    /// reported as [`AppError::Accepted`].
    pub async fn execute_accepted<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Response<T>, AppError> {
        let options = SendOptions {
            accepted_is_success: true,
            ..SendOptions::default()
        };
        let (meta, body) = self.send(request, options).await?;
        let data = decode_body(&body)?;
        Ok(meta.with_data(data))
    }

    /// Builds and sends a request for which `202 Accepted` is a success
    pub async fn request_accepted<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response<T>, AppError> {
        let request = self.new_request(method, path, body)?;
        self.execute_accepted(request).await
    }

    /// Sends a request without checking the stored rate limit first
    pub(crate) async fn execute_bypassing_rate_limit<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Response<T>, AppError> {
        let options = SendOptions {
            bypass_rate_limit: true,
            ..SendOptions::default()
        };
        let (meta, body) = self.send(request, options).await?;
        let data = decode_body(&body)?;
        Ok(meta.with_data(data))
    }

    /// Sends a request with throttling, rate-limit tracking and retries
    async fn send(
        &self,
        request: Request,
        options: SendOptions,
    ) -> Result<(Response<()>, Vec<u8>), AppError> {
        let method = request.method().clone();
        let url = request.url().clone();
        let category = RateLimitCategory::for_request(&method, url.path());

        if !options.bypass_rate_limit {
            self.check_rate_limit_before_do(&method, &url, category)?;
        }

        let mut attempt = 0;
        loop {
            let current = request.try_clone().ok_or_else(|| {
                AppError::InvalidInput(format!("request body of {method} {url} cannot be replayed"))
            })?;

            self.rate_limiter.wait().await;
            debug!("{} {}", method, url);

            let response = self.http_client.execute(current).await?;
            let status = response.status();
            let headers = response.headers().clone();
            debug!("Response status: {}", status);

            let meta = Response::from_parts(status, &headers);
            if let Some(rate) = &meta.rate {
                self.store_rate(category, rate.clone());
            }
            let body = response.bytes().await?.to_vec();

            match check_response(&method, &url, status, &headers, &body) {
                Ok(()) => return Ok((meta, body)),
                Err(AppError::AbuseRateLimit(e)) => {
                    attempt += 1;
                    if !self.config.retry.allows(attempt) {
                        warn!("Secondary rate limit hit on {} {}: {}", method, url, e);
                        return Err(AppError::AbuseRateLimit(e));
                    }
                    let delay = self.config.retry.delay_for(e.retry_after);
                    warn!(
                        "Secondary rate limit hit (attempt {}): {}. Waiting {} seconds before retry...",
                        attempt,
                        e.message,
                        delay.as_secs()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e @ AppError::RateLimit(_)) => {
                    warn!("{}", e);
                    return Err(e);
                }
                Err(AppError::Accepted { .. }) if options.accepted_is_success => {
                    debug!("{} {} accepted, processing continues server side", method, url);
                    return Ok((meta, body));
                }
                Err(e @ AppError::Accepted { .. }) => return Err(e),
                Err(e) => {
                    error!("Request failed: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// Refuses to send a request whose category is known to be exhausted
    fn check_rate_limit_before_do(
        &self,
        method: &Method,
        url: &Url,
        category: RateLimitCategory,
    ) -> Result<(), AppError> {
        let Some(rate) = self.rate_limit(category) else {
            return Ok(());
        };
        if !rate.is_exhausted() {
            return Ok(());
        }

        let message = format!(
            "API rate limit of {} still exceeded until {}, not making remote request.",
            rate.limit, rate.reset
        );
        warn!("{}", message);
        let mut response = ErrorResponse::new(StatusCode::FORBIDDEN, message.clone());
        response.method = method.to_string();
        response.url = url.to_string();
        Err(AppError::RateLimit(RateLimitError {
            rate,
            response,
            message,
        }))
    }

    /// Fetches every page of a paginated list
    ///
    /// `fetch` is called with page 1 and the configured page size, then with
    /// each `next_page` until the server reports no further page.
    pub async fn collect_pages<T, F, Fut>(&self, mut fetch: F) -> Result<Vec<T>, AppError>
    where
        F: FnMut(ListOptions) -> Fut,
        Fut: Future<Output = Result<Response<Vec<T>>, AppError>>,
    {
        let mut items = Vec::new();
        let mut opts = ListOptions::new(1, self.config.page_size);
        loop {
            let page = fetch(opts.clone()).await?;
            let next = page.next_page;
            items.extend(page.data);
            debug!("Fetched page {:?}, {} items so far", opts.page, items.len());
            if next == 0 {
                break;
            }
            opts.page = Some(next);
        }
        Ok(items)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SendOptions {
    bypass_rate_limit: bool,
    accepted_is_success: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default()).expect("Failed to create HTTP client")
    }
}

fn resolve(base: &Url, kind: &str, path: &str) -> Result<Url, AppError> {
    if !base.path().ends_with('/') {
        return Err(AppError::InvalidInput(format!(
            "{kind} URL must have a trailing slash, but \"{base}\" does not"
        )));
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Classifies a response, returning an error for anything but 2xx
///
/// 202 is reported as [`AppError::Accepted`]. Non-2xx responses become
/// [`AppError::TwoFactorRequired`], [`AppError::RateLimit`],
/// [`AppError::AbuseRateLimit`] or [`AppError::Api`], in that order of
/// precedence.
pub fn check_response(
    method: &Method,
    url: &Url,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), AppError> {
    if status == StatusCode::ACCEPTED {
        return Err(AppError::Accepted {
            raw: String::from_utf8_lossy(body).into_owned(),
        });
    }
    if status.is_success() {
        return Ok(());
    }

    let mut error_response = serde_json::from_slice::<ErrorResponse>(body)
        .unwrap_or_else(|_| ErrorResponse::new(status, String::from_utf8_lossy(body).trim()));
    error_response.status = status;
    error_response.method = method.to_string();
    error_response.url = url.to_string();

    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if status == StatusCode::UNAUTHORIZED
        && header(HEADER_OTP).is_some_and(|v| v.trim_start().starts_with("required"))
    {
        return Err(AppError::TwoFactorRequired(error_response));
    }

    let limited = status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS;
    if limited && header(HEADER_RATE_REMAINING).map(str::trim) == Some("0") {
        let rate = Rate::from_headers(headers).unwrap_or_default();
        return Err(AppError::RateLimit(RateLimitError {
            rate,
            message: error_response.message.clone(),
            response: error_response,
        }));
    }

    let secondary = error_response
        .documentation_url
        .as_deref()
        .is_some_and(|doc| doc.contains("secondary-rate-limits") || doc.contains("abuse"));
    if (limited && secondary) || status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = header(HEADER_RETRY_AFTER)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .or_else(|| {
                let reset = header(HEADER_RATE_RESET)?.trim().parse::<i64>().ok()?;
                let wait = reset - Timestamp::now().unix();
                u64::try_from(wait).ok().map(Duration::from_secs)
            });
        return Err(AppError::AbuseRateLimit(AbuseRateLimitError {
            message: error_response.message.clone(),
            response: error_response,
            retry_after,
        }));
    }

    Err(AppError::Api(error_response))
}
