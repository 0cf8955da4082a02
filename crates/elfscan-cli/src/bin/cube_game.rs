//! cube-game - Sum the ids of cube games that fit in the bag
//!
//! Prints one line per record saying whether it passed, then the sum of
//! the ids of every possible game.

use anyhow::{Context, Result};
use clap::Parser;
use elfscan_cli::{init_tracing, scan_failure, CommonArgs};
use elfscan_core::{scan_file, BagLimits, GameRules, GameScanner, ZeroCountPolicy};
use tracing::info;

/// Sum the ids of games whose every handful fits in the bag
#[derive(Parser, Debug)]
#[command(name = "cube-game")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Red cubes in the bag
    #[arg(long, default_value_t = BagLimits::STANDARD.max.red)]
    max_red: u32,

    /// Green cubes in the bag
    #[arg(long, default_value_t = BagLimits::STANDARD.max.green)]
    max_green: u32,

    /// Blue cubes in the bag
    #[arg(long, default_value_t = BagLimits::STANDARD.max.blue)]
    max_blue: u32,

    /// Treat a count of zero ("0 red") as valid instead of rejecting the record
    #[arg(long)]
    accept_zero_counts: bool,
}

impl Cli {
    fn rules(&self) -> GameRules {
        let zero_counts = if self.accept_zero_counts {
            ZeroCountPolicy::Accept
        } else {
            ZeroCountPolicy::Reject
        };

        GameRules::new()
            .limits(BagLimits::new(self.max_red, self.max_green, self.max_blue))
            .zero_counts(zero_counts)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    let input = &cli.common.input;
    let scanner = GameScanner::with_rules(cli.rules());
    info!(
        "Judging games in {} against a bag of {}",
        input.display(),
        scanner.rules().limits.max
    );

    let summary = scan_file(&scanner, input, |_, report| {
        let mark = if report.is_possible() { "pass" } else { "fail" };
        println!("{} {}", mark, report);
    })
    .map_err(scan_failure)
    .with_context(|| format!("Failed to scan game records: {}", input.display()))?;

    info!(
        "{} games scanned, {} possible",
        summary.lines, summary.counted
    );
    println!("sum: {}", summary.total);
    Ok(())
}
