/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # SIP Client Prelude
//!
//! Brings the types needed for most SIP API interactions into scope.
//!
//! ## Usage
//!
//! ```rust
//! use sip_client::prelude::*;
//!
//! let config = Config::api_key("sip.example.com", "my-key");
//! assert_eq!(config.effective_status_policy(), StatusPolicy::ConflictAware);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the SIP API client
pub use crate::config::{AuthMode, Config, StatusPolicy, TlsVerification};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND PAGINATION
// ============================================================================

/// Authentication strategy and session tokens
pub use crate::auth::{Auth, Session};

/// The SIP API client
pub use crate::client::Client;

/// Reader trait providing `get_all_pages`
pub use crate::interface::ApiReader;

/// Base URLs and endpoint normalization
pub use crate::model::urls::{ApiUrls, normalize_endpoint};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
