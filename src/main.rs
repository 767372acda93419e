use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use beaulog::config::Config;
use beaulog::{export, EmitMode};

#[derive(Parser)]
#[command(name = "beaulog", about = "Beautify debug logs into structured JSON")]
struct Cli {
    /// Log file path (default: from config, falling back to debug.log).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit newline-delimited JSON records instead of an array.
    #[arg(long)]
    ndjson: bool,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the JSON on stdout.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let input = cli.input.unwrap_or(config.input.path);
    let mode = if cli.ndjson || config.output.ndjson {
        EmitMode::Ndjson
    } else {
        EmitMode::Array
    };

    let reader = export::open_input(&input)?;

    let written = match cli.output {
        Some(path) => {
            let mut out = File::create(&path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            export::emit(reader, &mut out, mode, false)?
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let written = export::emit(reader, &mut out, mode, true)?;
            out.flush()?;
            written
        }
    };

    tracing::debug!(records = written, input = %input.display(), "export complete");
    Ok(())
}
