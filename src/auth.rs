/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication strategies for the SIP API
//!
//! Two strategies exist:
//! - Password login, where `/auth` hands out an access and a refresh token
//!   and `/refresh` mints new access tokens
//! - A static API key, sent unchanged with every request

use crate::config::AuthMode;
use serde::{Deserialize, Serialize};

/// Tokens held by a password-login client
///
/// Both tokens are unset until the first successful login. Login sets both,
/// refresh replaces only the access token, and nothing clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to API requests
    pub access_token: Option<String>,
    /// Token used to obtain a new access token
    pub refresh_token: Option<String>,
}

impl Session {
    /// Checks if a login has stored an access token
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Active authentication strategy of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// Username/password login with refreshable bearer tokens
    PasswordLogin(Session),
    /// Static API key
    ApiKey(String),
}

impl Auth {
    /// Creates the strategy for a configured auth mode, with an empty session
    #[must_use]
    pub fn new(mode: &AuthMode) -> Self {
        match mode {
            AuthMode::PasswordLogin => Auth::PasswordLogin(Session::default()),
            AuthMode::ApiKey { key } => Auth::ApiKey(key.clone()),
        }
    }

    /// `Authorization` header value for API requests
    ///
    /// `None` for a password-login client that has not logged in yet.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        match self {
            Auth::PasswordLogin(session) => session
                .access_token
                .as_ref()
                .map(|token| format!("Bearer {token}")),
            Auth::ApiKey(key) => Some(format!("Apikey {key}")),
        }
    }

    /// Checks if this is the password-login strategy
    #[must_use]
    pub fn is_password_login(&self) -> bool {
        matches!(self, Auth::PasswordLogin(_))
    }

    /// Session tokens, for the password-login strategy only
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Auth::PasswordLogin(session) => Some(session),
            Auth::ApiKey(_) => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Auth::PasswordLogin(session) => Some(session),
            Auth::ApiKey(_) => None,
        }
    }
}
