/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_HOST, DEFAULT_SCHEME};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// How the client authenticates against the SIP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthMode {
    /// Username/password exchanged for an access and a refresh token
    PasswordLogin,
    /// Static key sent as `Authorization: Apikey <key>`
    ApiKey {
        /// The API key
        key: String,
    },
}

/// TLS certificate verification applied to every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsVerification {
    /// Accept any certificate
    Disabled,
    /// Verify against the system trust store
    System,
    /// Verify against a PEM trust anchor file
    CaBundle(PathBuf),
}

impl From<bool> for TlsVerification {
    fn from(verify: bool) -> Self {
        if verify {
            TlsVerification::System
        } else {
            TlsVerification::Disabled
        }
    }
}

/// How non-success statuses are turned into errors
///
/// Token-expiry detection in password-login mode happens before the policy
/// is applied, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Return every response body as the result, whatever its status
    Passthrough,
    /// Every non-2xx status is a `RequestFailed`
    Uniform,
    /// 409 is a `Conflict`, every other non-2xx status is a `RequestFailed`
    ConflictAware,
}

impl StatusPolicy {
    /// Policy used when the configuration does not name one
    #[must_use]
    pub fn default_for(mode: &AuthMode) -> Self {
        match mode {
            AuthMode::PasswordLogin => StatusPolicy::Passthrough,
            AuthMode::ApiKey { .. } => StatusPolicy::ConflictAware,
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passthrough" => Ok(StatusPolicy::Passthrough),
            "uniform" => Ok(StatusPolicy::Uniform),
            "conflict" | "conflict_aware" => Ok(StatusPolicy::ConflictAware),
            other => Err(format!("unknown status policy: {other}")),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusPolicy::Passthrough => "passthrough",
            StatusPolicy::Uniform => "uniform",
            StatusPolicy::ConflictAware => "conflict",
        };
        f.write_str(name)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the SIP API client
pub struct Config {
    /// Server where SIP is running, as `host` or `host:port`
    pub host: String,
    /// URL scheme for the base URLs (`https` unless talking to a plain HTTP server)
    pub scheme: String,
    /// Authentication strategy
    pub auth: AuthMode,
    /// TLS certificate verification
    pub verify: TlsVerification,
    /// Status classification; `None` picks the default for the auth mode
    pub status_policy: Option<StatusPolicy>,
    /// Probe `host:port` over TCP before the client is handed out
    pub liveness_check: bool,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file
    ///
    /// `SIP_API_KEY` selects API-key mode when present; otherwise the client
    /// uses password login.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let host = get_env_or_default("SIP_HOST", String::from(DEFAULT_HOST));
        let scheme = get_env_or_default("SIP_SCHEME", String::from(DEFAULT_SCHEME));

        let auth = match get_env_or_none::<String>("SIP_API_KEY") {
            Some(key) if !key.is_empty() => AuthMode::ApiKey { key },
            _ => AuthMode::PasswordLogin,
        };

        let verify = match get_env_or_none::<PathBuf>("SIP_CA_BUNDLE") {
            Some(path) => TlsVerification::CaBundle(path),
            None => TlsVerification::from(get_env_or_default("SIP_VERIFY", true)),
        };

        Config {
            host,
            scheme,
            auth,
            verify,
            status_policy: get_env_or_none("SIP_STATUS_POLICY"),
            liveness_check: get_env_or_default("SIP_LIVENESS_CHECK", false),
            timeout_secs: get_env_or_none("SIP_TIMEOUT_SECS"),
        }
    }

    /// Configuration for a password-login session against `host`
    pub fn password_login(host: impl Into<String>) -> Self {
        Self::with_auth(host, AuthMode::PasswordLogin)
    }

    /// Configuration for a static API key against `host`
    pub fn api_key(host: impl Into<String>, key: impl Into<String>) -> Self {
        Self::with_auth(host, AuthMode::ApiKey { key: key.into() })
    }

    fn with_auth(host: impl Into<String>, auth: AuthMode) -> Self {
        Config {
            host: host.into(),
            scheme: String::from(DEFAULT_SCHEME),
            auth,
            verify: TlsVerification::System,
            status_policy: None,
            liveness_check: false,
            timeout_secs: None,
        }
    }

    /// Sets the URL scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets TLS verification; accepts a bool or a [`TlsVerification`]
    #[must_use]
    pub fn with_verify(mut self, verify: impl Into<TlsVerification>) -> Self {
        self.verify = verify.into();
        self
    }

    /// Overrides the status classification policy
    #[must_use]
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = Some(policy);
        self
    }

    /// Enables or disables the construction-time liveness probe
    #[must_use]
    pub fn with_liveness_check(mut self, enabled: bool) -> Self {
        self.liveness_check = enabled;
        self
    }

    /// Sets a request timeout in seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// The status policy in effect for this configuration
    #[must_use]
    pub fn effective_status_policy(&self) -> StatusPolicy {
        self.status_policy
            .unwrap_or_else(|| StatusPolicy::default_for(&self.auth))
    }
}
