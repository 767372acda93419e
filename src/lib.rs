//! beaulog — beautify debug logs into structured JSON.
//!
//! Converts a line-oriented debug log into a uniform JSON representation,
//! one record per line. The upstream logging format has gone through several
//! revisions, so a single file can mix line shapes:
//!
//! ```text
//! [2025-08-12T23:31:22.036Z] [DEBUG stdin] { ... }
//! [2025-08-12T23:31:22.036Z] [DEBUG socket:send] {"event":"...","payload":{...}}
//! [DEBUG stdout] { ... }                          older runs, no timestamp
//! [in 2025-08-12T23:00:53.414Z] { ... }           legacy frames
//! [2025-08-12T23:31:22.036Z] plain message
//! ```
//!
//! The classifier maps each shape to a [`Record`] with a closed set of
//! [`RecordKind`]s; the export layer serializes records as a pretty JSON
//! array or as newline-delimited JSON.
//!
//! # Architecture
//!
//! ```text
//! Classifier ──► Export
//! ```
//!
//! Classification is a pure per-line function with no cross-line state; the
//! export layer owns all I/O.

pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use classifier::classify;
pub use error::{Error, Result};
pub use export::EmitMode;
pub use types::{Record, RecordKind};
