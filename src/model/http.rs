/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::config::StatusPolicy;
use crate::constants::TOKEN_EXPIRED_MSG;
use crate::error::AppError;
use crate::model::responses::ErrorMessage;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Status and body of a completed HTTP exchange
///
/// The body is read eagerly so that error variants can carry it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

/// Rules used to turn a [`RawResponse`] into a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRules {
    /// Classification of non-success statuses
    pub policy: StatusPolicy,
    /// Map `401 {"msg": "Token has expired"}` to `AccessTokenExpired`
    pub detect_token_expiry: bool,
}

impl StatusRules {
    /// Checks the status of a response against these rules
    ///
    /// # Returns
    /// * `Ok(())` - The body should be handed to the caller
    /// * `Err(AppError)` - Expired token, conflict or failed request
    pub fn check(&self, response: &RawResponse) -> Result<(), AppError> {
        let status = response.status;

        if self.detect_token_expiry
            && status == StatusCode::UNAUTHORIZED
            && response.is_token_expired()
        {
            warn!("Access token has expired");
            return Err(AppError::AccessTokenExpired);
        }

        if status.is_success() {
            return Ok(());
        }

        match self.policy {
            StatusPolicy::Passthrough => {
                debug!("Passing through body of {} response", status);
                Ok(())
            }
            StatusPolicy::ConflictAware if status == StatusCode::CONFLICT => {
                error!("Conflict: {}", response.body);
                Err(AppError::Conflict(response.body.clone()))
            }
            StatusPolicy::ConflictAware | StatusPolicy::Uniform => {
                error!("Request failed with status {}: {}", status, response.body);
                Err(AppError::RequestFailed {
                    status,
                    body: response.body.clone(),
                })
            }
        }
    }
}

impl RawResponse {
    /// Checks for the SIP token expiry payload
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        serde_json::from_str::<ErrorMessage>(&self.body)
            .ok()
            .and_then(|message| message.msg)
            .is_some_and(|msg| msg == TOKEN_EXPIRED_MSG)
    }

    /// Decodes the body of a response to `method` as JSON
    ///
    /// A `204 No Content` answer to a POST is `Value::Null` and its body is
    /// not parsed. A failure status whose body is not JSON (a proxy error
    /// page, say) becomes `RequestFailed` so status and body survive.
    pub fn into_json(self, method: &Method) -> Result<Value, AppError> {
        if *method == Method::POST && self.status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&self.body) {
            Ok(value) => Ok(value),
            Err(e) if !self.status.is_success() => {
                warn!("Non-JSON body in {} response: {}", self.status, e);
                Err(AppError::RequestFailed {
                    status: self.status,
                    body: self.body,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Sends one HTTP request and reads the whole response body
///
/// No retries: transport errors are returned as they happen.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `authorization` - Value for the `Authorization` header, if any
/// * `body` - Optional request body, serialized as JSON
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    authorization: Option<&str>,
    body: Option<&B>,
) -> Result<RawResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;
    Ok(RawResponse { status, body })
}
