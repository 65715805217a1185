//! `resize-icons` CLI - Render source-icon.png at the fixed icon sizes.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use iconkit::resize::{Config, Resizer};
use iconkit::Error;

/// Resize source-icon.png to icon16.png, icon48.png and icon128.png using Lanczos resampling.
#[derive(Parser, Debug)]
#[command(name = "resize-icons")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    iconkit::logging::init(args.verbose);

    if let Err(err) = run(Path::new(".")) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Generate every icon size in `dir`.
///
/// A missing source image is reported and ends the run without an error.
fn run(dir: &Path) -> Result<()> {
    let resizer = Resizer::new(Config::default()).context("Invalid resizer configuration")?;
    let config = resizer.config();

    let summary = match resizer.run(dir) {
        Ok(summary) => summary,
        Err(err @ Error::MissingSource { .. }) => {
            println!("Error: {err}");
            println!("Save the original image as {} next to the icons", config.source);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("Done! Generated {summary} icons");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_not_an_error() {
        let dir = tempfile::TempDir::new().unwrap();

        assert!(run(dir.path()).is_ok());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
