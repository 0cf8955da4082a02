//! Line-oriented driver shared by every scanner.
//!
//! The input is read lazily one line at a time and never held in full. Each
//! line is handed to a [`LineScanner`], which produces one outcome. The
//! outcome's numeric contribution is folded into a [`ScanSummary`].
//!
//! ## Line boundaries
//!
//! - A line ends at `\n` or at end of stream; a missing final newline is fine
//! - One trailing `\r` is stripped so CRLF input behaves like LF input
//! - Lines that are empty after stripping are skipped and not counted
//!
//! ## Extensibility
//!
//! Any fixed line format can be plugged in through [`LineScanner`]:
//!
//! ```
//! use elfscan_core::scanner::{scan_reader, LineScanner};
//!
//! struct ByteCount;
//!
//! impl LineScanner for ByteCount {
//!     type Outcome = usize;
//!
//!     fn scan_line(&self, line: &[u8]) -> usize {
//!         line.len()
//!     }
//!
//!     fn contribution(&self, outcome: &usize) -> u64 {
//!         *outcome as u64
//!     }
//! }
//!
//! let summary = scan_reader(&ByteCount, &b"ab\ncde\n"[..], |_, _| {})?;
//! assert_eq!(summary.total, 5);
//! # Ok::<(), elfscan_core::Error>(())
//! ```

mod cursor;

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

pub use cursor::{ByteCursor, DecimalError};

/// A purpose-built, single-pass scanner for one fixed line format
pub trait LineScanner {
    /// What the scanner reports for one line
    type Outcome;

    /// Scan one line. `line` carries no `\n` terminator.
    fn scan_line(&self, line: &[u8]) -> Self::Outcome;

    /// The amount an outcome adds to the running total
    fn contribution(&self, outcome: &Self::Outcome) -> u64;
}

/// Running totals threaded through the line fold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines handed to the scanner (blank lines excluded)
    pub lines: usize,
    /// Lines whose contribution was non-zero
    pub counted: usize,
    /// Sum of all contributions
    pub total: u64,
}

impl ScanSummary {
    /// Returns the summary with one more scanned line folded in
    #[must_use]
    pub fn record(self, contribution: u64) -> Self {
        Self {
            lines: self.lines + 1,
            counted: self.counted + usize::from(contribution != 0),
            total: self.total.saturating_add(contribution),
        }
    }
}

/// Scan every line of `reader` and fold the contributions into a summary.
///
/// `on_line` sees each outcome together with its one-based line number,
/// in input order. The first I/O error aborts the scan and the partial
/// summary is dropped.
pub fn scan_reader<S, R, F>(scanner: &S, reader: R, mut on_line: F) -> Result<ScanSummary>
where
    S: LineScanner + ?Sized,
    R: BufRead,
    F: FnMut(usize, &S::Outcome),
{
    let summary = reader.split(b'\n').enumerate().try_fold(
        ScanSummary::default(),
        |summary, (index, line)| -> Result<ScanSummary> {
            let line_number = index + 1;
            let line = line.map_err(|e| Error::read(line_number, e))?;
            let line = strip_carriage_return(&line);

            if line.is_empty() {
                trace!("Skipping blank line {}", line_number);
                return Ok(summary);
            }

            let outcome = scanner.scan_line(line);
            let contribution = scanner.contribution(&outcome);
            trace!("Line {} contributes {}", line_number, contribution);

            on_line(line_number, &outcome);
            Ok(summary.record(contribution))
        },
    )?;

    debug!(
        "Scan complete: {} lines, {} counted, total {}",
        summary.lines, summary.counted, summary.total
    );
    Ok(summary)
}

/// Scan a file line by line.
///
/// This is a convenience function that opens the file and hands a buffered
/// reader to [`scan_reader`]. The file is closed on every return path.
pub fn scan_file<S, F>(scanner: &S, path: impl AsRef<Path>, on_line: F) -> Result<ScanSummary>
where
    S: LineScanner + ?Sized,
    F: FnMut(usize, &S::Outcome),
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_open(path, e))?;
    trace!("Opened {}", path.display());
    scan_reader(scanner, BufReader::new(file), on_line)
}

fn strip_carriage_return(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
