//! Log file setup
//!
//! The terminal belongs to the UI, so tracing output goes to a log file in
//! the base directory. Filtering follows `RUST_LOG`, defaulting to
//! `pointkeeper=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{PointsError, PointsResult};

static INIT_TRACING: Once = Once::new();

/// Install the global subscriber writing to `path`
///
/// Only the first call installs anything; later calls still check that the
/// file can be opened.
pub fn init_logging(path: &Path) -> PointsResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PointsError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pointkeeper=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    Ok(())
}
