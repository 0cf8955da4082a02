//! Calibration values: the first and last digit of a line.
//!
//! Each line of a calibration document hides a two-digit number made of the
//! first decimal digit on the line (tens) and the last one (ones). A line with
//! a single digit uses it twice. A line without digits has no value and adds
//! nothing to the sum.
//!
//! [`DigitTracker`] is the underlying state machine. It can be fed a raw byte
//! stream directly, or used through [`calibrate`] / [`CalibrationScanner`] on
//! lines that were already split.

use crate::scanner::LineScanner;
use tracing::trace;

/// The first and last digit seen on a line, as values `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPair {
    /// Tens place
    pub first: u8,
    /// Ones place
    pub last: u8,
}

impl DigitPair {
    /// The two-digit calibration value
    pub fn value(&self) -> u32 {
        u32::from(self.first) * 10 + u32::from(self.last)
    }
}

/// Per-line digit tracking state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitTracker {
    /// No digit on the current line yet
    #[default]
    Empty,
    /// At least one digit seen
    Seen(DigitPair),
}

impl DigitTracker {
    /// Creates a tracker positioned at the start of a line
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    ///
    /// Returns `Some` at a `\n`, carrying the finished line's pair (or `None`
    /// if that line had no digit), and resets for the next line.
    pub fn push(&mut self, byte: u8) -> Option<Option<DigitPair>> {
        match byte {
            b'\n' => Some(self.finish()),
            b'0'..=b'9' => {
                let digit = byte - b'0';
                *self = match *self {
                    Self::Empty => Self::Seen(DigitPair {
                        first: digit,
                        last: digit,
                    }),
                    Self::Seen(pair) => Self::Seen(DigitPair {
                        last: digit,
                        ..pair
                    }),
                };
                None
            }
            _ => None,
        }
    }

    /// Close the current line at end of stream and reset
    pub fn finish(&mut self) -> Option<DigitPair> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Seen(pair) => Some(pair),
        }
    }
}

/// Extract the digit pair of a single line.
///
/// Scanning stops at the first `\n`; anything after it belongs to the next
/// line.
pub fn calibrate(line: &[u8]) -> Option<DigitPair> {
    let mut tracker = DigitTracker::new();
    for &byte in line {
        if let Some(done) = tracker.push(byte) {
            return done;
        }
    }
    tracker.finish()
}

/// Sum the calibration values of a whole document held in memory
pub fn calibration_sum(document: &[u8]) -> u64 {
    let mut tracker = DigitTracker::new();
    let value = |pair: Option<DigitPair>| pair.map_or(0, |p| u64::from(p.value()));

    let total = document
        .iter()
        .filter_map(|&byte| tracker.push(byte))
        .map(value)
        .sum::<u64>();
    total + value(tracker.finish())
}

/// [`LineScanner`] for calibration documents
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibrationScanner;

impl CalibrationScanner {
    /// Creates a new calibration scanner
    pub fn new() -> Self {
        Self
    }
}

impl LineScanner for CalibrationScanner {
    type Outcome = Option<DigitPair>;

    fn scan_line(&self, line: &[u8]) -> Option<DigitPair> {
        let pair = calibrate(line);
        if pair.is_none() {
            trace!("No digit on line of {} bytes", line.len());
        }
        pair
    }

    fn contribution(&self, outcome: &Option<DigitPair>) -> u64 {
        outcome.map_or(0, |pair| u64::from(pair.value()))
    }
}
