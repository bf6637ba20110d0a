//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_LATENCY_MS};
pub use types::{Config, LatencyConfig, SessionConfig};
