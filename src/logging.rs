//! File-based logging via `tracing`.
//!
//! The terminal is owned by the UI while the game runs, so log output goes to
//! a file or nowhere at all.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG` when set, otherwise from `level`
pub fn build_filter(level: &str) -> io::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bad log level '{}': {}", level, e))),
    }
}

/// Installs the global subscriber writing to `log_file`.
///
/// Without a file nothing is installed and all `tracing` calls are no-ops.
pub fn init(log_file: Option<&Path>, level: &str) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_installs_nothing() {
        assert!(init(None, "info").is_ok());
    }

    #[test]
    fn test_level_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("tictactoe=trace,warn").is_ok());
        assert!(build_filter("tictactoe=loudest").is_err());
    }
}
