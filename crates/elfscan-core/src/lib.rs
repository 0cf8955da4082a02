//! # elfscan-core
//!
//! Single-pass line scanners for two small puzzle formats.
//!
//! This crate provides the core functionality for:
//! - Reading an input stream one line at a time and folding per-line results
//!   into a total
//! - Recovering calibration values from the first and last digit of a line
//! - Judging cube game records against the contents of a bag
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`scanner`]: The line driver, the [`LineScanner`] trait, and the byte cursor
//! - [`calibration`]: First/last digit extraction
//! - [`cubes`]: Cube game record validation
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use elfscan_core::{scan_file, GameScanner};
//!
//! let summary = scan_file(&GameScanner::new(), "day02.txt", |line, report| {
//!     println!("{}: {}", line, report);
//! })?;
//! println!("sum: {}", summary.total);
//! # Ok::<(), elfscan_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod calibration;
pub mod cubes;
pub mod error;
pub mod scanner;

// Re-export primary types for convenience
pub use calibration::{calibrate, calibration_sum, CalibrationScanner, DigitPair, DigitTracker};
pub use cubes::{
    BagLimits, Colour, CubeSet, GameReport, GameRules, GameScanner, MalformedRecord, Verdict,
    ZeroCountPolicy,
};
pub use error::{Error, Result};
pub use scanner::{scan_file, scan_reader, LineScanner, ScanSummary};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
