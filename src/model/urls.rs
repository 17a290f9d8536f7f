/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::API_PREFIX;
use serde::{Deserialize, Serialize};

/// Base URLs of a SIP deployment, computed once per client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrls {
    /// Base for resource endpoints, always ending in `/api/`
    pub api: String,
    /// Credential exchange URL
    pub auth: String,
    /// Access token refresh URL
    pub refresh: String,
}

impl ApiUrls {
    /// Builds the URLs for `scheme://host`
    #[must_use]
    pub fn new(scheme: &str, host: &str) -> Self {
        let root = format!("{}://{}", scheme, host.trim_end_matches('/'));
        Self {
            api: format!("{root}/api/"),
            auth: format!("{root}/auth"),
            refresh: format!("{root}/refresh"),
        }
    }

    /// Full URL of a resource endpoint
    ///
    /// # Example
    /// ```
    /// use sip_client::model::urls::ApiUrls;
    ///
    /// let urls = ApiUrls::new("https", "sip.example.com");
    /// assert_eq!(
    ///     urls.resource("/api/indicators/?page=2"),
    ///     "https://sip.example.com/api/indicators/?page=2"
    /// );
    /// ```
    #[must_use]
    pub fn resource(&self, endpoint: &str) -> String {
        format!("{}{}", self.api, normalize_endpoint(endpoint))
    }
}

/// Strips leading slashes and every `api/` substring from an endpoint
///
/// Lets callers pass either a bare path or a path echoed back by the server,
/// such as a pagination link, without doubling the API prefix.
#[must_use]
pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_start_matches('/').replace(API_PREFIX, "")
}
