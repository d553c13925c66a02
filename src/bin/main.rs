//! CLI entry point: decompresses a bz2 Hebrew Wiktionary dump, runs it through
//! the Dump Driver, and writes the resulting records to `pages.json`.

use anyhow::{Context, Result};
use bzip2::read::BzDecoder;
use clap::Parser;
use parse_wiktionary_he::dump::read_pages;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Parses dictionary pages out of a Hebrew Wiktionary XML dump.
#[derive(Parser)]
struct Args {
    /// Path to the bz2-compressed MediaWiki export dump.
    dump: PathBuf,

    /// Increase log verbosity; repeatable. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Assemble pages one at a time instead of across a worker pool.
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = File::open(&args.dump)
        .with_context(|| format!("failed to open dump at {}", args.dump.display()))?;
    let mut xml = String::new();
    BzDecoder::new(file).read_to_string(&mut xml).context("failed to decompress the dump")?;

    let pages = read_pages(&xml, !args.sequential);
    log::info!("kept {} page(s) after filtering", pages.len());

    let mut out = File::create("pages.json").context("failed to create pages.json")?;
    serde_json::to_writer(&mut out, &pages).context("failed to serialize pages.json")?;
    out.flush().context("failed to flush pages.json")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}
