//! Core types for beaulog.
//!
//! This module defines the output model: the [`Record`] emitted for each
//! classified line and its [`RecordKind`] discriminant.

use serde::Serialize;
use serde_json::Value;

/// The structured form of one classified log line.
///
/// `kind` and `raw` are always set. `time` and `header` are always emitted,
/// as `null` when the line carried none. The remaining fields are emitted
/// only by the kinds that populate them: `event`/`payload` by socket
/// records, `message` by `log` records, `data` by everything except `log`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Timestamp text extracted from the line. Not validated as ISO-8601;
    /// legacy frames carry whatever stood between the direction word and `]`.
    pub time: Option<String>,
    /// The bracketed tag as it appeared in the source line, original case
    /// and spacing preserved.
    pub header: Option<String>,
    /// `event` key lifted from a socket payload object. `Some(Value::Null)`
    /// when the object has no such key; `None` for every other record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    /// `payload` key lifted from a socket payload object, same convention
    /// as `event`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Trailing text of a timestamped line with no DEBUG tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Parsed payload JSON, the trimmed payload string when parsing failed,
    /// or `null` when the payload was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Original line text, trailing newline stripped.
    pub raw: String,
}

impl Record {
    /// A record with only `kind` and `raw` set. Classifier branches fill in
    /// the fields their shape provides.
    pub(crate) fn bare(kind: RecordKind, raw: &str) -> Self {
        Self {
            kind,
            time: None,
            header: None,
            event: None,
            payload: None,
            message: None,
            data: None,
            raw: raw.to_string(),
        }
    }
}

/// Semantic category of a classified line. Closed set; serialized snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Stdin,
    Stdout,
    SocketSend,
    SocketRecv,
    Debug,
    Log,
    Raw,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Stdin => write!(f, "stdin"),
            RecordKind::Stdout => write!(f, "stdout"),
            RecordKind::SocketSend => write!(f, "socket_send"),
            RecordKind::SocketRecv => write!(f, "socket_recv"),
            RecordKind::Debug => write!(f, "debug"),
            RecordKind::Log => write!(f, "log"),
            RecordKind::Raw => write!(f, "raw"),
        }
    }
}
