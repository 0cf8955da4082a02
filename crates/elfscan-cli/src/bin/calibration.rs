//! calibration - Sum the calibration values of a document
//!
//! Every line's value is its first and last digit read as a two-digit
//! number. Lines without a digit count as zero.

use anyhow::{Context, Result};
use clap::Parser;
use elfscan_cli::{init_tracing, scan_failure, CommonArgs};
use elfscan_core::{scan_file, CalibrationScanner};
use tracing::{debug, info};

/// Sum the first-and-last-digit values of every line
#[derive(Parser, Debug)]
#[command(name = "calibration")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    let input = &cli.common.input;
    info!("Reading calibration document {}", input.display());

    let summary = scan_file(&CalibrationScanner::new(), input, |line, pair| match pair {
        Some(pair) => debug!("Line {}: {}", line, pair.value()),
        None => debug!("Line {}: no digits", line),
    })
    .map_err(scan_failure)
    .with_context(|| format!("Failed to scan calibration document: {}", input.display()))?;

    info!(
        "{} lines scanned, {} carried a calibration value",
        summary.lines, summary.counted
    );
    println!("sum: {}", summary.total);
    Ok(())
}
