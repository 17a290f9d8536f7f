/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP request execution and status classification
pub mod http;
/// Helpers for paginated collection responses
pub mod pagination;
/// Response models from API calls
pub mod responses;
/// Base URLs and endpoint normalization
pub mod urls;
