use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::auth::DEFAULT_AUTH_LATENCY_MS;
use crate::feedback::DEFAULT_SUBMIT_LATENCY_MS;
use crate::session::FileKeyValueStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Simulated request delays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Login/register delay in milliseconds (default: 1000).
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,
    /// Feedback submission delay in milliseconds (default: 1000).
    #[serde(default = "default_submit_ms")]
    pub submit_ms: u64,
}

/// Where the signed-in user is mirrored between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file override; platform data dir when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Keep the session across runs (default: true).
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_auth_ms() -> u64 {
    DEFAULT_AUTH_LATENCY_MS
}

fn default_submit_ms() -> u64 {
    DEFAULT_SUBMIT_LATENCY_MS
}

fn default_persist() -> bool {
    true
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth_ms: default_auth_ms(),
            submit_ms: default_submit_ms(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: None,
            persist: default_persist(),
        }
    }
}

impl SessionConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileKeyValueStore::default_path)
    }
}
