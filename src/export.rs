//! Export — classifies an input stream and serializes the records.
//!
//! Two modes: a single pretty-printed JSON array (2-space indent) or
//! newline-delimited compact JSON. Both preserve input order and leave
//! non-ASCII text unescaped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::classifier;
use crate::error::{Error, Result};

/// Output serialization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// One pretty-printed JSON array of records.
    Array,
    /// One compact JSON object per line.
    Ndjson,
}

/// Open the input log file, mapping a missing file to
/// [`Error::InputNotFound`] so the driver can report it distinctly.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::InputNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Classify every line of `input` and write the records to `out`.
///
/// Ndjson mode streams each record as soon as its line is classified; array
/// mode collects first so the output is a single pretty-printed value.
/// `trailing_newline` appends a newline after the closing bracket in array
/// mode (the terminal-friendly behavior when writing to stdout); it has no
/// effect in ndjson mode, which is newline-terminated by construction.
///
/// Returns the number of records written.
pub fn emit<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    mode: EmitMode,
    trailing_newline: bool,
) -> Result<usize> {
    match mode {
        EmitMode::Array => emit_array(input, out, trailing_newline),
        EmitMode::Ndjson => emit_ndjson(input, out),
    }
}

fn emit_array<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    trailing_newline: bool,
) -> Result<usize> {
    let mut records = Vec::new();
    for line in input.lines() {
        let line = line?;
        if let Some(record) = classifier::classify(&line) {
            tracing::trace!(kind = %record.kind, "classified line");
            records.push(record);
        }
    }
    serde_json::to_writer_pretty(&mut *out, &records)?;
    if trailing_newline {
        out.write_all(b"\n")?;
    }
    Ok(records.len())
}

fn emit_ndjson<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<usize> {
    let mut written = 0usize;
    for line in input.lines() {
        let line = line?;
        let Some(record) = classifier::classify(&line) else {
            continue;
        };
        tracing::trace!(kind = %record.kind, "classified line");
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}
