//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use busvoz::app::App;
use busvoz::latency::{Latency, NoLatency};
use busvoz::model::User;
use busvoz::session::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use busvoz::store::MemoryStore;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;

pub const SEED_EMAIL: &str = "joao@exemplo.com";
pub const SEED_USER_ID: &str = "1";

/// Seeded app with no delays and an in-memory session slot.
pub async fn app() -> App {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    app_with_session(kv).await
}

/// Seeded app with no delays sharing `kv` as its session slot.
pub async fn app_with_session(kv: Arc<dyn KeyValueStore>) -> App {
    let app = App::from_parts(
        Arc::new(MemoryStore::seeded()),
        Some(kv),
        Arc::new(NoLatency),
        Arc::new(NoLatency),
    );
    app.start().await;
    app
}

/// Seeded app, not yet started, with the given delays.
pub fn app_with_latency(auth: Arc<dyn Latency>, submit: Arc<dyn Latency>) -> App {
    App::from_parts(Arc::new(MemoryStore::seeded()), None, auth, submit)
}

/// Temp dir plus a session file path inside it.
pub fn temp_session() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session_path = temp_dir.path().join("session.json");
    (temp_dir, session_path)
}

/// The binary with a missing config file, no delays and its session under
/// `dir`.
pub fn busvoz_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_busvoz"));
    cmd.arg("--config")
        .arg(dir.join("missing.toml"))
        .arg("--no-delay")
        .arg("--session-file")
        .arg(dir.join("session.json"))
        .env_remove("BUSVOZ_LOG")
        .env_remove("RUST_LOG");
    cmd
}
