//! Tracing setup
//!
//! The TUI owns stdout, so log lines go to a file. `RUST_LOG` takes
//! precedence over the configured level.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(default_level: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(from_env.as_deref(), default_level)
}

/// First parseable of `env_directives`, `default_level`, then plain "info"
fn filter_for(env_directives: Option<&str>, default_level: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_path`
pub fn init(log_path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    let log_file = File::create(log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(log_file))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(())
}
