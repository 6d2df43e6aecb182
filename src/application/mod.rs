/// Application configuration module
pub mod config;
/// Service interfaces, one trait per resource family
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations on the HTTP client
pub mod services;
