/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP client: request construction, sending and response classification
pub mod http;
/// Pagination and query option encoding
pub mod options;
/// Rate-limit categories and quotas
pub mod rate;
/// Request bodies shared by several services
pub mod requests;
/// Response wrapper with pagination and rate metadata
pub mod response;
/// Retry configuration for HTTP requests
pub mod retry;
