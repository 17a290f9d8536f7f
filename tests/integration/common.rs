// Common utilities for integration tests

use mockito::ServerGuard;
use sip_client::prelude::*;

/// Creates a password-login client talking plain HTTP to the mock server
pub async fn create_password_client(server: &ServerGuard) -> Client {
    setup_logger();
    let config = Config::password_login(server.host_with_port())
        .with_scheme("http")
        .with_liveness_check(true);
    Client::new(config).await.expect("Failed to create client")
}

/// Creates an API-key client talking plain HTTP to the mock server
pub async fn create_api_key_client(server: &ServerGuard, key: &str) -> Client {
    setup_logger();
    let config = Config::api_key(server.host_with_port(), key)
        .with_scheme("http")
        .with_liveness_check(true);
    Client::new(config).await.expect("Failed to create client")
}

/// GET through the client, refreshing once when the access token has expired
pub async fn get_with_refresh(
    client: &mut Client,
    endpoint: &str,
) -> Result<serde_json::Value, AppError> {
    match client.get(endpoint).await {
        Err(AppError::AccessTokenExpired) => {
            client.refresh_token().await?;
            client.get(endpoint).await
        }
        other => other,
    }
}
