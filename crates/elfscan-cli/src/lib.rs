//! Shared plumbing for the elfscan binaries.
//!
//! Both programs take one input file and a verbosity count, and log through
//! `tracing` to stderr so that stdout carries only their results.

use clap::Args;
use elfscan_core::Error;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Arguments every elfscan program accepts
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Puzzle input file, one record per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Maps a `-v` count to the most detailed level that gets logged
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` directives still apply on top of the `-v` level.
pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level_for(verbose).into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Converts a scan failure for reporting, naming the OS error code when
/// the failure carries one
pub fn scan_failure(err: Error) -> anyhow::Error {
    match err.os_code() {
        Some(code) => anyhow::Error::new(err).context(format!("I/O error code {}", code)),
        None => anyhow::Error::new(err),
    }
}
