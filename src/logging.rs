//! Tracing setup.
//!
//! Standard output is the game itself, so logs go to a file.

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tictactoe_rules=debug";

/// Routes tracing output to `log_file`, truncating it.
///
/// A subscriber that is already installed is left in place.
pub fn init_tracing(log_file: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
