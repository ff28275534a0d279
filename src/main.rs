//! Binary entry point for the ascii-art tool.
//!
//! Reads a picture from SOURCE and writes it to TARGET, either run-length
//! encoded (`-e`) or unchanged (`-i`).

use anyhow::Context;
use clap::{ArgGroup, Parser};
use rle_list::ascii_art;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run-length encode ascii-art pictures.
#[derive(Parser, Debug)]
#[command(name = "ascii-art-tool")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["encoded", "identity"])))]
struct Cli {
    /// Write the run-length encoded form.
    #[arg(short = 'e')]
    encoded: bool,

    /// Write the picture unchanged.
    #[arg(short = 'i')]
    identity: bool,

    /// Picture to read.
    source: PathBuf,

    /// File to write.
    target: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = File::open(&cli.source)
        .with_context(|| format!("cannot open source {}", cli.source.display()))?;
    let list = ascii_art::read(source).context("reading source")?;
    info!(
        source = %cli.source.display(),
        bytes = list.len(),
        runs = list.run_count(),
        "loaded picture"
    );

    // Only touch the target once the whole picture is in memory
    let target = File::create(&cli.target)
        .with_context(|| format!("cannot create target {}", cli.target.display()))?;

    let mut writer = BufWriter::new(target);
    if cli.encoded {
        ascii_art::print_encoded(&list, &mut writer).context("writing encoded target")?;
    } else {
        ascii_art::print(&list, &mut writer).context("writing target")?;
    }

    info!(target = %cli.target.display(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
