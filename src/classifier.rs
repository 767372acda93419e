//! Line classifier — maps one raw log line to zero-or-one [`Record`].
//!
//! Matching is attempted in order: timestamped (DEBUG-tagged or generic) →
//! bare DEBUG tag → legacy `[in/out]` frame → raw fallback. The first match
//! wins; a blank (whitespace-only) line yields nothing at all.

use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;
use serde_json::Value;

use crate::types::{Record, RecordKind};

// ---------------------------------------------------------------------------
// Line-shape patterns
// ---------------------------------------------------------------------------

static TS_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2}T[^\]]+)\]\s*(.*)$").expect("pattern must compile")
});

static DEBUG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(DEBUG [^\]]+)\]\s*(.*)$").expect("pattern must compile")
});

static LEGACY_INOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[(in|out)\s+([^\]]+)\]\s*(.*)$").expect("pattern must compile")
});

/// Known DEBUG tags, lowercased, mapped to their specialized record kind.
/// Tags not in this table stay [`RecordKind::Debug`].
static TAG_KINDS: phf::Map<&'static str, RecordKind> = phf_map! {
    "debug stdin" => RecordKind::Stdin,
    "debug stdout" => RecordKind::Stdout,
    "debug socket:send" => RecordKind::SocketSend,
    "debug socket.recv" => RecordKind::SocketRecv,
};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify one line of log text.
///
/// Returns `None` for blank input; every other line yields exactly one
/// record whose `raw` field is the line verbatim (trailing newline
/// stripped). The function is pure: no state, no I/O, and the same input
/// always produces the same record.
pub fn classify(line: &str) -> Option<Record> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.trim().is_empty() {
        return None;
    }

    // 1) Timestamped lines: [ISO] <rest>
    if let Some(ts) = TS_PREFIX.captures(line) {
        let (time, rest) = (&ts[1], &ts[2]);

        // 1a) [ISO] [DEBUG <tag>] <payload>
        if let Some(dbg) = DEBUG_TAG.captures(rest) {
            return Some(tagged(&dbg[1], &dbg[2], Some(time.to_string()), line));
        }

        // 1b) Timestamped but untagged: generic log message
        return Some(Record {
            time: Some(time.to_string()),
            message: Some(rest.trim().to_string()),
            ..Record::bare(RecordKind::Log, line)
        });
    }

    // 2) DEBUG-tagged lines without a timestamp (older runs)
    if let Some(dbg) = DEBUG_TAG.captures(line) {
        return Some(tagged(&dbg[1], &dbg[2], None, line));
    }

    // 3) Legacy [in <time>] / [out <time>] frames
    if let Some(legacy) = LEGACY_INOUT.captures(line) {
        let (direction, when, payload) = (&legacy[1], &legacy[2], &legacy[3]);
        let kind = if direction.eq_ignore_ascii_case("in") {
            RecordKind::Stdin
        } else {
            RecordKind::Stdout
        };
        return Some(Record {
            time: Some(when.trim().to_string()),
            header: Some(format!("[{direction} {when}]")),
            data: Some(parse_payload(payload)),
            ..Record::bare(kind, line)
        });
    }

    // 4) Fallback: keep the line as-is
    Some(Record {
        data: Some(Value::String(line.trim().to_string())),
        ..Record::bare(RecordKind::Raw, line)
    })
}

/// Build a record for a `[DEBUG <tag>] <payload>` line, with or without a
/// timestamp prefix.
fn tagged(tag: &str, payload: &str, time: Option<String>, line: &str) -> Record {
    let kind = TAG_KINDS
        .get(tag.to_lowercase().as_str())
        .copied()
        .unwrap_or(RecordKind::Debug);
    let data = parse_payload(payload);

    // Socket records lift `event` and `payload` out of an object payload;
    // a key the object lacks becomes an explicit null.
    let (event, lifted) = match (kind, &data) {
        (RecordKind::SocketSend | RecordKind::SocketRecv, Value::Object(obj)) => (
            Some(obj.get("event").cloned().unwrap_or(Value::Null)),
            Some(obj.get("payload").cloned().unwrap_or(Value::Null)),
        ),
        _ => (None, None),
    };

    Record {
        time,
        header: Some(format!("[{tag}]")),
        event,
        payload: lifted,
        data: Some(data),
        ..Record::bare(kind, line)
    }
}

/// Parse a payload substring: empty → null, valid JSON → the parsed value,
/// invalid JSON → the trimmed string itself. Never fails.
fn parse_payload(payload: &str) -> Value {
    let payload = payload.trim();
    if payload.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(payload).unwrap_or_else(|_| Value::String(payload.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
