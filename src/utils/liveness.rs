/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_PORT;
use crate::error::AppError;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// Returns `host:port` for a SIP host, adding the default port when none is given
///
/// Bracketed IPv6 literals (`[::1]` or `[::1]:8443`) are supported.
#[must_use]
pub fn socket_address(host: &str) -> String {
    let has_port = match host.rsplit_once(':') {
        Some((name, port)) => {
            port.parse::<u16>().is_ok() && (!name.contains(':') || name.ends_with(']'))
        }
        None => false,
    };

    if has_port {
        host.to_string()
    } else {
        format!("{host}:{DEFAULT_PORT}")
    }
}

/// Opens and drops a single TCP connection to `host`, bounded by `limit`
///
/// # Returns
/// * `Ok(())` - The host accepted the connection in time
/// * `Err(AppError::ConnectionFailure)` - Refused, unresolvable or timed out
pub async fn check_liveness(host: &str, limit: Duration) -> Result<(), AppError> {
    let address = socket_address(host);
    debug!("Probing {} (limit {:?})", address, limit);

    match timeout(limit, TcpStream::connect(&address)).await {
        Ok(Ok(_stream)) => {
            info!("SIP host {} is reachable", address);
            Ok(())
        }
        Ok(Err(e)) => {
            error!("Unable to connect to {}: {}", address, e);
            Err(AppError::ConnectionFailure(format!("{address}: {e}")))
        }
        Err(_) => {
            error!("Connection to {} timed out after {:?}", address, limit);
            Err(AppError::ConnectionFailure(format!(
                "{address}: timed out after {limit:?}"
            )))
        }
    }
}
