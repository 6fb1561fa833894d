mod commands;
mod config;
mod context;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use cyclic::{Cyclic, CyclicConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::FileConfig;
use crate::context::{Context, ContextWord};

#[derive(Parser, Debug)]
#[command(name = "cyclic", version)]
#[command(about = "Cyclic pattern creator/finder")]
#[command(group(ArgGroup::new("mode").required(true).args(["count", "lookup"])))]
struct Args {
    /// The alphabet to use in the cyclic pattern (defaults to all lower case letters)
    #[arg(short, long, value_name = "ALPHABET")]
    alphabet: Option<String>,

    /// Size of the unique subsequences (defaults to 4)
    #[arg(short = 'n', long = "length", value_name = "LENGTH")]
    length: Option<usize>,

    /// The os/architecture/endianness the pattern will be read on (default: linux/i386)
    #[arg(short, long, value_name = "CONTEXT")]
    context: Vec<ContextWord>,

    /// Do a lookup instead of printing the alphabet
    #[arg(
        short = 'l',
        long = "lookup",
        visible_short_alias = 'o',
        visible_alias = "offset",
        value_name = "LOOKUP_VALUE",
        allow_hyphen_values = true
    )]
    lookup: Option<String>,

    /// Number of characters to print
    count: Option<u64>,

    /// Defaults file (TOML)
    #[arg(long, env = "CYCLIC_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the raw pattern
    let directive = if args.verbose {
        "cyclic=debug"
    } else {
        "cyclic=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let file = FileConfig::resolve(args.config.as_deref())?;
    let engine = Cyclic::new(engine_config(&args, &file)?)?;

    if let Some(value) = args.lookup.as_deref() {
        commands::lookup::run(&engine, value)
    } else if let Some(count) = args.count {
        commands::generate::run(&engine, count)
    } else {
        unreachable!("clap enforces the mode group")
    }
}

/// Merge command line, config file and built-in defaults (in that order)
fn engine_config(args: &Args, file: &FileConfig) -> Result<CyclicConfig> {
    let words = if args.context.is_empty() {
        file.context_words()?
    } else {
        args.context.clone()
    };
    let context = Context::from_words(&words);
    debug!(%context, "Execution context");

    let mut builder = CyclicConfig::builder().byte_order(context.byte_order);
    if let Some(alphabet) = args.alphabet.as_ref().or(file.alphabet.as_ref()) {
        builder = builder.alphabet(alphabet);
    }
    if let Some(length) = args.length.or(file.length) {
        builder = builder.window(length);
    }
    if let Some(limit) = file.scan_limit {
        builder = builder.scan_limit(limit);
    }
    Ok(builder.build())
}
