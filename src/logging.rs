use std::fs::File;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file base path.
pub const LOG_FILE_ENV: &str = "CARTBIND_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG`, falling back to `info` (or `debug` when
/// `verbose`). Stdout carries rendered output, so events go to stderr unless
/// `CARTBIND_LOG` names a file; a file that cannot be created falls back to
/// stderr.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let mut open_error = None;
    let file = std::env::var(LOG_FILE_ENV)
        .ok()
        .map(|base| session_log_path(&base))
        .and_then(|path| match File::create(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                open_error = Some((path, err));
                None
            }
        });

    let stderr_layer = file
        .is_none()
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some((path, err)) = open_error {
        tracing::warn!(path = %path.display(), %err, "cannot create log file, logging to stderr");
    }
}

/// `{base}.{unix_secs}.{pid}`, so concurrent sessions get separate files.
fn session_log_path(base: &str) -> PathBuf {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, secs, std::process::id()))
}
