//! Error types for the `rummi-board` binary and snapshot loading.
//!
//! The layout and navigation engine itself is total and never returns an
//! error: degenerate inputs produce empty rows or `None`. Errors only exist
//! at the boundary where untrusted input enters:
//!
//! - [`AppError`] - Top-level error for the binary
//!   - [`SnapshotError`] - Board snapshot file failures (missing file, bad TOML, bad tile ids)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - `std::io::Error` - Writing output
//!
//! All variants carry structured context and compose via `?` and `From`.

use super::tile::InvalidTileId;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the binary.
///
/// Every domain error converts into `AppError` via `From`, so `main`
/// can propagate with `?`.
///
/// # Examples
///
/// ```no_run
/// use rummi_board::model::error::{AppError, SnapshotError};
///
/// fn run() -> Result<(), AppError> {
///     let _snapshot = load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), SnapshotError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The board snapshot could not be loaded.
    #[error("Failed to load board snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    /// The configuration file could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line argument was well-formed for clap but not for the board.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors encountered when loading a board snapshot file.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use rummi_board::model::error::SnapshotError;
///
/// let err = SnapshotError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.toml"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.toml"));
/// ```
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The snapshot file is not valid TOML or has the wrong shape.
    #[error("Invalid snapshot in {path}: {reason}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser error message.
        reason: String,
    },

    /// A tile id in the snapshot is out of range.
    #[error("Invalid tile in {section}: {source}")]
    InvalidTile {
        /// Which part of the snapshot held the bad id (`rack`, `virtual`, `board[2]`).
        section: String,
        /// The rejected id.
        #[source]
        source: InvalidTileId,
    },

    /// Reading the file failed for another reason.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
