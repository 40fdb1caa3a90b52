//! Library error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before or outside the checks themselves.
///
/// Per-file and per-field problems are never errors; they become failed
/// findings inside their check group.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// No project marker found walking up from the start directory.
    #[error(
        "no {marker} found in {} or any ancestor directory; run from inside the project",
        .start.display()
    )]
    MarkerNotFound { marker: String, start: PathBuf },
}
