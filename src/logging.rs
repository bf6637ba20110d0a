use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file. Unset means logging to stderr.
pub const LOG_FILE_ENV: &str = "BUSVOZ_LOG";

/// Initialize tracing.
///
/// Without `BUSVOZ_LOG` only warnings reach stderr so command output stays
/// readable; `RUST_LOG` overrides the level. With `BUSVOZ_LOG` set, logs
/// go to `{path}.{timestamp}.{pid}` at `info` by default.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
        return;
    };

    // Unique name so concurrent runs don't interleave in one file.
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
