/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Body returned by a successful credential exchange
pub struct LoginResponse {
    /// Bearer token for API requests
    pub access_token: String,
    /// Token accepted by the refresh endpoint
    pub refresh_token: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Body returned by a successful token refresh
pub struct RefreshResponse {
    /// New bearer token for API requests
    pub access_token: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Error payload the SIP API attaches to authentication failures
pub struct ErrorMessage {
    /// Human readable reason
    #[serde(default)]
    pub msg: Option<String>,
}
