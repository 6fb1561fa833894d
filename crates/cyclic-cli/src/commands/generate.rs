//! Generate command implementation.
//!
//! Streams the pattern to stdout in fixed-size chunks, so large counts never
//! hold the whole sequence in memory.

use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::Result;
use cyclic::{Cyclic, DeBruijn};
use owo_colors::OwoColorize;
use tracing::debug;

/// Bytes pulled from the generator per write (64KB)
const WRITE_CHUNK_SIZE: usize = 64 * 1024;

/// Run the generate command
pub fn run(engine: &Cyclic, count: u64) -> Result<()> {
    let (sequence, warning) = engine.stream(count);
    if let Some(warning) = warning {
        eprintln!("{} {}", "[-]".red().bold(), warning);
    }

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());

    let result = write_sequence(&mut out, sequence).and_then(|written| {
        debug!(written, "Pattern written");
        if interactive {
            out.write_all(b"\n")?;
        }
        out.flush()
    });

    ignore_broken_pipe(result).map_err(Into::into)
}

/// A reader that went away (e.g. piped into `head`) is not a failure
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write every remaining byte of `sequence`, returning the count written
pub fn write_sequence<W: Write>(out: &mut W, mut sequence: DeBruijn<'_>) -> io::Result<u64> {
    let mut chunk = Vec::with_capacity(WRITE_CHUNK_SIZE);
    let mut written = 0u64;
    loop {
        chunk.clear();
        chunk.extend(sequence.by_ref().take(WRITE_CHUNK_SIZE));
        if chunk.is_empty() {
            return Ok(written);
        }
        out.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
}
