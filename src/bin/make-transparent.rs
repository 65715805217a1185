//! `make-transparent` CLI - Turn light icon backgrounds transparent.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use iconkit::transparency::{Config, Converter, DEFAULT_THRESHOLD};

/// Make white or light backgrounds of icon16.png, icon48.png and icon128.png transparent.
///
/// Each icon is backed up once as <name>_backup.png before being rewritten in place.
#[derive(Parser, Debug)]
#[command(name = "make-transparent")]
#[command(version, about, long_about = None)]
struct Args {
    /// Pixels whose R, G and B are all above this value become transparent.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, value_name = "0-255")]
    threshold: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    iconkit::logging::init(args.verbose);

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        threshold: args.threshold,
        ..Config::default()
    };

    let converter = Converter::new(config).context("Invalid converter configuration")?;

    println!("Making icon backgrounds transparent...");
    println!(
        "Hint: white or light backgrounds (RGB > {}) will be removed",
        converter.config().threshold
    );
    println!();

    let summary = converter.run(Path::new("."));

    println!();
    println!("Done! Converted {summary} icons");
    println!("Originals are backed up as *_backup.png");

    Ok(())
}
