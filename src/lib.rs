/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # SIP Client
//!
//! A client for the SIP HTTP JSON API. It covers the authenticated request
//! lifecycle and the traversal of paginated collections:
//!
//! - Password login with access/refresh tokens, or a static API key
//! - `GET`/`POST`/`PUT`/`DELETE` helpers with endpoint normalization
//! - Classification of HTTP statuses into [`error::AppError`] variants
//! - Walking `_links.next` cursors to collect every page of a collection
//!
//! ## Example
//!
//! ```ignore
//! use sip_client::prelude::*;
//!
//! let config = Config::api_key("sip.example.com", "my-key").with_liveness_check(true);
//! let client = Client::new(config).await?;
//!
//! let indicators = client.get_all_pages("/api/indicators/").await?;
//! let created = client.post("indicators/", &serde_json::json!({"value": "1.2.3.4"})).await?;
//! ```
//!
//! The client never retries. When a password-login session answers with
//! [`error::AppError::AccessTokenExpired`], the caller refreshes and repeats
//! the call:
//!
//! ```ignore
//! let mut client = Client::new(Config::password_login("sip.example.com")).await?;
//! client.login("analyst", "secret").await?;
//!
//! let campaigns = match client.get("campaigns").await {
//!     Err(AppError::AccessTokenExpired) => {
//!         client.refresh_token().await?;
//!         client.get("campaigns").await?
//!     }
//!     other => other?,
//! };
//! ```

/// Authentication strategies and session tokens
pub mod auth;
/// The SIP API client
pub mod client;
/// Configuration for the client
pub mod config;
/// Constants shared across the crate
pub mod constants;
/// Error type returned by every fallible operation
pub mod error;
/// Reader trait exposing pagination on top of `get`
pub mod interface;
/// Wire-level models: requests, responses, URLs and pagination
pub mod model;
/// Commonly used types
pub mod prelude;
/// Environment, logging and connectivity helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
