/// Module containing environment variable helpers
pub mod config;
/// Module containing the TCP liveness probe
pub mod liveness;
/// Module containing logging utilities
pub mod logger;

pub use liveness::*;
pub use logger::*;
