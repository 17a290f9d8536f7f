/// User agent string used in HTTP requests to identify this client to the SIP API
pub const USER_AGENT: &str = concat!("sip-client/", env!("CARGO_PKG_VERSION"));
/// Scheme used to build the base URLs when none is configured
pub const DEFAULT_SCHEME: &str = "https";
/// Host used when `SIP_HOST` is not set
pub const DEFAULT_HOST: &str = "localhost";
/// Port probed by the liveness check when the host carries none
pub const DEFAULT_PORT: u16 = 443;
/// Upper bound in seconds for the construction-time TCP liveness probe
pub const LIVENESS_TIMEOUT_SECS: u64 = 2;
/// Message the SIP API puts in `msg` when a bearer token is no longer valid
pub const TOKEN_EXPIRED_MSG: &str = "Token has expired";
/// Path segment stripped from endpoints before joining them to the API base
pub const API_PREFIX: &str = "api/";
