/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the SIP API
//!
//! This module provides a single client that handles:
//! - Password login and access token refresh, or a static API key
//! - Endpoint normalization against the `/api/` base
//! - Classification of responses into results and [`AppError`] variants
//! - Pagination through [`ApiReader::get_all_pages`]
//!
//! # Example
//! ```ignore
//! use sip_client::prelude::*;
//!
//! let mut client = Client::new(Config::password_login("sip.example.com:4443")).await?;
//! client.login("analyst", "secret").await?;
//!
//! let intel = client.get_all_pages("intel/").await?;
//! client.delete("intel/42").await?;
//! ```

use crate::auth::{Auth, Session};
use crate::config::{Config, TlsVerification};
use crate::constants::{LIVENESS_TIMEOUT_SECS, USER_AGENT};
use crate::error::AppError;
use crate::interface::ApiReader;
use crate::model::http::{RawResponse, StatusRules, make_http_request};
use crate::model::responses::{LoginResponse, RefreshResponse};
use crate::model::urls::ApiUrls;
use crate::utils::liveness::check_liveness;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Certificate, Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Client for the SIP API
///
/// Requests are sent one at a time and every failure is returned to the
/// caller as is; nothing is retried. Session tokens change only through
/// [`Client::login`] and [`Client::refresh_token`], which take `&mut self`.
#[derive(Debug)]
pub struct Client {
    http_client: HttpClient,
    config: Config,
    urls: ApiUrls,
    auth: Auth,
    rules: StatusRules,
}

impl Client {
    /// Creates a new client
    ///
    /// Runs the TCP liveness probe first when the configuration asks for it.
    /// No login is performed.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError::ConnectionFailure)` - The liveness probe failed
    /// * `Err(AppError)` - The trust anchor could not be loaded or the transport could not be built
    pub async fn new(config: Config) -> Result<Self, AppError> {
        if config.liveness_check {
            check_liveness(&config.host, Duration::from_secs(LIVENESS_TIMEOUT_SECS)).await?;
        }

        let http_client = build_http_client(&config)?;
        let urls = ApiUrls::new(&config.scheme, &config.host);
        let auth = Auth::new(&config.auth);
        let rules = StatusRules {
            policy: config.effective_status_policy(),
            detect_token_expiry: auth.is_password_login(),
        };

        debug!("SIP client created for {} ({} policy)", urls.api, rules.policy);

        Ok(Self {
            http_client,
            config,
            urls,
            auth,
            rules,
        })
    }

    /// Logs into SIP to obtain an access and a refresh token
    ///
    /// # Returns
    /// * `Ok(())` - Both tokens are stored in the session
    /// * `Err(AppError::InvalidLogin)` - The server answered 401; the session is unchanged
    /// * `Err(AppError::InvalidInput)` - The client uses an API key
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        if !self.auth.is_password_login() {
            return Err(AppError::InvalidInput(
                "login requires password-login mode".to_string(),
            ));
        }

        info!("Logging in to {} as {}", self.urls.auth, username);

        let response = self
            .http_client
            .post(&self.urls.auth)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            error!("Login rejected for {}", username);
            return Err(AppError::InvalidLogin);
        }
        if !status.is_success() {
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::RequestFailed { status, body });
        }

        let tokens: LoginResponse = serde_json::from_str(&body)?;

        if let Some(session) = self.auth.session_mut() {
            session.access_token = Some(tokens.access_token);
            session.refresh_token = Some(tokens.refresh_token);
        }

        info!("✓ Login successful");
        Ok(())
    }

    /// Obtains a new access token with the stored refresh token
    ///
    /// Does nothing when no login has happened yet. The refresh token itself
    /// is kept.
    ///
    /// # Returns
    /// * `Ok(())` - The access token was replaced, or there was nothing to refresh
    /// * `Err(AppError::RefreshTokenExpired)` - The server answered 401; the session is unchanged
    /// * `Err(AppError::InvalidInput)` - The client uses an API key
    pub async fn refresh_token(&mut self) -> Result<(), AppError> {
        let Some(refresh_token) = self
            .auth
            .session()
            .map(|session| session.refresh_token.clone())
        else {
            return Err(AppError::InvalidInput(
                "refresh requires password-login mode".to_string(),
            ));
        };

        let Some(refresh_token) = refresh_token else {
            warn!("No refresh token held, skipping refresh");
            return Ok(());
        };

        info!("Refreshing access token");

        let response = self
            .http_client
            .post(&self.urls.refresh)
            .header(AUTHORIZATION, format!("Bearer {refresh_token}"))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            warn!("Refresh token rejected");
            return Err(AppError::RefreshTokenExpired);
        }
        if !status.is_success() {
            error!("Token refresh failed with status {}: {}", status, body);
            return Err(AppError::RequestFailed { status, body });
        }

        let token: RefreshResponse = serde_json::from_str(&body)?;

        if let Some(session) = self.auth.session_mut() {
            session.access_token = Some(token.access_token);
        }

        info!("✓ Token refreshed successfully");
        Ok(())
    }

    /// Performs a GET request to the SIP API
    pub async fn get(&self, endpoint: &str) -> Result<Value, AppError> {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    /// Collects every item of a paginated collection, see [`ApiReader::get_all_pages`]
    pub async fn get_all_pages(&self, endpoint: &str) -> Result<Vec<Value>, AppError> {
        ApiReader::get_all_pages(self, endpoint).await
    }

    /// Performs a GET request and deserializes the body into `T`
    pub async fn get_as<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let value = self.get(endpoint).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Performs a POST request to the SIP API
    ///
    /// A `204 No Content` answer yields `Value::Null`.
    pub async fn post<B: Serialize + ?Sized + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// Reads a JSON document from `path` and POSTs it to `endpoint`
    pub async fn post_file(
        &self,
        endpoint: &str,
        path: impl AsRef<Path>,
    ) -> Result<Value, AppError> {
        let path = path.as_ref();
        debug!("Loading request body from {}", path.display());

        let contents = tokio::fs::read_to_string(path).await?;
        let body: Value = serde_json::from_str(&contents)?;
        self.post(endpoint, &body).await
    }

    /// Performs a PUT request to the SIP API
    pub async fn put<B: Serialize + ?Sized + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// Performs a DELETE request to the SIP API
    ///
    /// Returns the raw response body, which need not be JSON.
    pub async fn delete(&self, endpoint: &str) -> Result<String, AppError> {
        let response = self.send(Method::DELETE, endpoint, None::<&()>).await?;
        self.rules.check(&response)?;
        Ok(response.body)
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        let response = self.send(method.clone(), endpoint, body).await?;
        self.rules.check(&response)?;
        response.into_json(&method)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, AppError> {
        let url = self.urls.resource(endpoint);
        let authorization = self.auth.authorization();

        if authorization.is_none() {
            warn!("Sending {} {} without credentials; login first", method, url);
        }

        make_http_request(
            &self.http_client,
            method,
            &url,
            authorization.as_deref(),
            body,
        )
        .await
    }

    /// Current session tokens; `None` for an API-key client
    pub fn session(&self) -> Option<&Session> {
        self.auth.session()
    }

    /// Current access token, if a login has happened
    pub fn access_token(&self) -> Option<&str> {
        self.auth.session()?.access_token.as_deref()
    }

    /// Current refresh token, if a login has happened
    pub fn refresh_token_value(&self) -> Option<&str> {
        self.auth.session()?.refresh_token.as_deref()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URLs derived from the configuration
    pub fn urls(&self) -> &ApiUrls {
        &self.urls
    }

    /// Gets the active authentication strategy
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait]
impl ApiReader for Client {
    async fn get(&self, endpoint: &str) -> Result<Value, AppError> {
        Client::get(self, endpoint).await
    }
}

/// Builds the HTTP transport with the configured TLS verification and timeout
fn build_http_client(config: &Config) -> Result<HttpClient, AppError> {
    let mut builder = HttpClient::builder().user_agent(USER_AGENT);

    builder = match &config.verify {
        TlsVerification::System => builder,
        TlsVerification::Disabled => {
            warn!("TLS certificate verification is disabled");
            builder.danger_accept_invalid_certs(true)
        }
        TlsVerification::CaBundle(path) => {
            debug!("Loading trust anchor from {}", path.display());
            let pem = std::fs::read(path)?;
            let certificates = Certificate::from_pem_bundle(&pem)?;
            if certificates.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "no certificates found in {}",
                    path.display()
                )));
            }
            debug!("Trusting {} certificate(s)", certificates.len());
            certificates
                .into_iter()
                .fold(builder, |builder, certificate| {
                    builder.add_root_certificate(certificate)
                })
        }
    };

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}
