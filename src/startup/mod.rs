//! Startup configuration and logging.

pub mod config;

pub use config::AppConfig;

use std::fs::File;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Initialize tracing to the configured log file.
///
/// The TUI owns the terminal, so logs never go to stdout/stderr. With no
/// log file configured this is a no-op. `RUST_LOG` controls the filter,
/// defaulting to `info`.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
