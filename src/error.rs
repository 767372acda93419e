//! Error types for the beaulog library layers.
//!
//! Only driver-level failures surface as errors. Per-line anomalies never
//! do: an unparseable payload degrades to a string value and an unmatched
//! line degrades to a `raw` record.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input log file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
