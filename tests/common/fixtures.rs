//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines in one
//! of the debug.log shapes. CORPUS_MIXED interleaves all shapes in realistic
//! file order, blank lines included.

/// Refined-format lines: `[ISO] [DEBUG <tag>] <payload>`.
pub const CORPUS_TAGGED: &[&str] = &[
    r#"[2025-08-12T23:31:22.036Z] [DEBUG stdin] {"x":1}"#,
    r#"[2025-08-12T23:31:22.040Z] [DEBUG stdout] {"ok":true,"items":[1,2,3]}"#,
    r#"[2025-08-12T23:31:22.044Z] [DEBUG socket:send] {"event":"ping","payload":{"n":1}}"#,
    r#"[2025-08-12T23:31:22.051Z] [DEBUG socket.recv] {"event":"pong","payload":{"n":1}}"#,
    r#"[2025-08-12T23:31:23.002Z] [DEBUG handshake] {"proto":2}"#,
];

/// DEBUG-tagged lines with no timestamp prefix, as produced by older runs.
pub const CORPUS_UNTIMESTAMPED: &[&str] = &[
    r#"[DEBUG stdin] {"cmd":"start"}"#,
    r#"[DEBUG socket.recv] {"event":"hello","payload":null}"#,
];

/// Legacy frames: `[in <time>]` / `[out <time>]`.
pub const CORPUS_LEGACY: &[&str] = &[
    r#"[in 2025-08-12T23:00:53.414Z] {"a":true}"#,
    r#"[out 2025-08-12T23:00:53.500Z] not valid json"#,
    r#"[OUT 2025-08-12T23:00:54.100Z] {"b":0}"#,
];

/// Timestamped lines with no DEBUG tag.
pub const CORPUS_PLAIN_LOG: &[&str] = &[
    "[2025-08-12T23:31:22.036Z] something happened",
    "[2025-08-12T23:31:25.900Z] reconnecting in 5s",
];

/// Lines matching no bracket shape at all.
pub const CORPUS_NOISE: &[&str] = &[
    "hello world",
    "panic: unexpected EOF",
    "}",
];

/// A mixed, realistic log in original file order. Contains one blank line
/// and one whitespace-only line, which the classifier must drop.
pub const CORPUS_MIXED: &[&str] = &[
    r#"[in 2025-08-12T23:00:53.414Z] {"a":true}"#,
    "",
    r#"[2025-08-12T23:31:22.036Z] [DEBUG stdin] {"x":1}"#,
    r#"[2025-08-12T23:31:22.044Z] [DEBUG socket:send] {"event":"ping","payload":{"n":1}}"#,
    "   ",
    "[2025-08-12T23:31:22.050Z] something happened",
    "hello world",
];

/// CORPUS_MIXED joined into file content, trailing newline included.
pub fn mixed_log_text() -> String {
    let mut text = CORPUS_MIXED.join("\n");
    text.push('\n');
    text
}

/// Number of CORPUS_MIXED lines that produce a record (non-blank lines).
pub const CORPUS_MIXED_RECORDS: usize = 5;
