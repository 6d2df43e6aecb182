/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response wrapper carrying pagination and rate-limit metadata

use crate::constants::HEADER_TOKEN_EXPIRATION;
use crate::model::rate::Rate;
use crate::presentation::serialization::Timestamp;
use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LINK};
use url::Url;

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([^>]+)>\s*;\s*rel="([a-z]+)""#).expect("link header regex is valid")
});

/// A decoded API response together with its metadata
///
/// Pagination fields are `0` / `None` when the corresponding `Link` entry
/// is absent, so `next_page == 0` means the last page was reached.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Decoded body
    pub data: T,
    /// HTTP status
    pub status: StatusCode,
    /// Next page number
    pub next_page: u32,
    /// Previous page number
    pub prev_page: u32,
    /// First page number
    pub first_page: u32,
    /// Last page number
    pub last_page: u32,
    /// Opaque token for the next page, for endpoints using non numeric pages or `since`
    pub next_page_token: Option<String>,
    /// Cursor for the next page
    pub cursor: Option<String>,
    /// Cursor to pass as `before` to get the previous page
    pub before: Option<String>,
    /// Cursor to pass as `after` to get the next page
    pub after: Option<String>,
    /// Rate limit state after this request
    pub rate: Option<Rate>,
    /// Expiration of the token used, when the server reports it
    pub token_expiration: Option<Timestamp>,
}

impl Response<()> {
    /// Builds the metadata part of a response from its status and headers
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: &HeaderMap) -> Response<()> {
        let mut response = Response {
            data: (),
            status,
            next_page: 0,
            prev_page: 0,
            first_page: 0,
            last_page: 0,
            next_page_token: None,
            cursor: None,
            before: None,
            after: None,
            rate: Rate::from_headers(headers),
            token_expiration: headers
                .get(HEADER_TOKEN_EXPIRATION)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_token_expiration),
        };
        if let Some(link) = headers.get(LINK).and_then(|v| v.to_str().ok()) {
            response.populate_page_values(link);
        }
        response
    }

    /// Attaches a decoded body to this metadata
    pub fn with_data<T>(self, data: T) -> Response<T> {
        self.map(|_| data)
    }
}

impl<T> Response<T> {
    /// Transforms the body, keeping the metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            status: self.status,
            next_page: self.next_page,
            prev_page: self.prev_page,
            first_page: self.first_page,
            last_page: self.last_page,
            next_page_token: self.next_page_token,
            cursor: self.cursor,
            before: self.before,
            after: self.after,
            rate: self.rate,
            token_expiration: self.token_expiration,
        }
    }

    /// Drops the metadata and returns the body
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Whether another page can be fetched with either a page number or a cursor
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page != 0
            || self.next_page_token.is_some()
            || self.cursor.is_some()
            || self.after.is_some()
    }

    /// Fills the pagination fields from a `Link` header value
    pub fn populate_page_values(&mut self, link_header: &str) {
        for captures in LINK_RE.captures_iter(link_header) {
            let (Some(target), Some(rel)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            let Ok(url) = Url::parse(target.as_str()) else {
                continue;
            };

            let mut page = None;
            let mut since = None;
            let mut cursor = None;
            let mut before = None;
            let mut after = None;
            for (key, value) in url.query_pairs() {
                if value.is_empty() {
                    continue;
                }
                match key.as_ref() {
                    "page" => page = Some(value.into_owned()),
                    "since" => since = Some(value.into_owned()),
                    "cursor" => cursor = Some(value.into_owned()),
                    "before" => before = Some(value.into_owned()),
                    "after" => after = Some(value.into_owned()),
                    _ => {}
                }
            }
            let page_number = page.as_deref().and_then(|p| p.parse::<u32>().ok());

            match rel.as_str() {
                "next" => {
                    match (page_number, page) {
                        (Some(number), _) => self.next_page = number,
                        (None, Some(token)) => self.next_page_token = Some(token),
                        (None, None) => {}
                    }
                    if let Some(since) = since {
                        self.next_page_token = Some(since);
                    }
                    self.cursor = cursor.or(self.cursor.take());
                    self.after = after.or(self.after.take());
                }
                "prev" => {
                    self.prev_page = page_number.unwrap_or_default();
                    self.before = before.or(self.before.take());
                }
                "first" => self.first_page = page_number.unwrap_or_default(),
                "last" => self.last_page = page_number.unwrap_or_default(),
                _ => {}
            }
        }
    }
}

/// Parses `github-authentication-token-expiration`, e.g. `2024-06-30 12:00:00 UTC`
fn parse_token_expiration(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if let Some(naive) = value.strip_suffix(" UTC") {
        return NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| Timestamp(dt.and_utc()));
    }
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z")
        .ok()
        .map(|dt| Timestamp(dt.with_timezone(&Utc)))
}
