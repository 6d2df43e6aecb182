//! # gh-client
//!
//! A typed, asynchronous client for the GitHub REST API.
//!
//! The crate is split in three layers:
//!
//! - [`model`]: the shared plumbing every endpoint goes through. Request
//!   construction, option encoding, pagination, rate-limit tracking and
//!   response classification live here.
//! - [`presentation`]: the data-transfer objects mirroring the JSON the API
//!   sends and accepts, one module per resource family.
//! - [`application`]: configuration, client-side throttling and the service
//!   traits (`RepositoryService`, `IssueService`, ...) implemented on
//!   [`model::http::Client`].
//!
//! ## Example
//!
//! ```ignore
//! use gh_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let repo = client.get_repository("rust-lang", "rust").await?;
//! println!("{}", repo.data.full_name.unwrap_or_default());
//! ```

/// Configuration, throttling and service traits
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Shared request/response plumbing
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// API data-transfer objects
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Version of the crate, as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
