//! Cube game records and the bag they were drawn from.
//!
//! A record looks like
//!
//! ```text
//! Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
//! ```
//!
//! Each `;`-separated group is one handful of cubes. A game is possible if
//! every group fits within the [`BagLimits`].
//!
//! ## Algorithm
//!
//! [`GameScanner`] walks the line once, left to right, with a [`ByteCursor`]:
//!
//! 1. Consume `Game`, the decimal id, and `:`
//! 2. Dispatch every following token on its first byte: separators are
//!    skipped, digits set the pending count, `r`/`g`/`b` add the pending
//!    count to that colour and jump past the colour word
//! 3. At `;` the group is judged; the first group over the limits ends the
//!    scan, otherwise the tally starts over
//! 4. At the end of the line the final group is judged
//!
//! Colour words are never compared in full. The first letter picks the
//! colour and the cursor then moves a fixed distance, which keeps the pass
//! allocation-free.

mod bag;

use crate::scanner::{ByteCursor, DecimalError, LineScanner};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace, warn};

pub use bag::{BagLimits, Colour, CubeSet, GameRules, ZeroCountPolicy};

const GAME_PREFIX: &[u8] = b"Game";

/// Why a record does not fit the game grammar
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRecord {
    /// The line does not start with `Game`
    #[error("line does not start with \"Game\"")]
    MissingPrefix,

    /// No digits after `Game`
    #[error("missing game id")]
    MissingId,

    /// The game id does not fit in a u32
    #[error("game id is too large")]
    IdOverflow,

    /// The id is not followed by `:`
    #[error("expected ':' after the game id")]
    MissingColon,

    /// A count of exactly zero under [`ZeroCountPolicy::Reject`]
    #[error("zero count at offset {offset}")]
    ZeroCount {
        /// Byte offset of the count
        offset: usize,
    },

    /// A count does not fit in a u32
    #[error("count at offset {offset} is too large")]
    CountOverflow {
        /// Byte offset of the count
        offset: usize,
    },

    /// A colour word with no count before it
    #[error("{colour} at offset {offset} has no count")]
    MissingCount {
        /// Byte offset of the colour word
        offset: usize,
        /// The colour that was named
        colour: Colour,
    },

    /// A count that no colour word claimed before the next count or group end
    #[error("count at offset {offset} is not followed by a colour")]
    DanglingCount {
        /// Byte offset of the unclaimed count
        offset: usize,
    },

    /// A byte the grammar has no place for
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte {
        /// Byte offset of the offending byte
        offset: usize,
        /// The offending byte
        byte: u8,
    },
}

/// The outcome of judging one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every group fits in the bag
    Possible,
    /// A group exceeds the bag; scanning stopped there
    Impossible {
        /// Zero-based index of the first group over the limits
        group: usize,
    },
    /// The record could not be read
    Malformed(MalformedRecord),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Possible => f.write_str("possible"),
            Verdict::Impossible { group } => write!(f, "impossible at group {}", group + 1),
            Verdict::Malformed(reason) => write!(f, "malformed ({})", reason),
        }
    }
}

/// What the scanner learned about one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// The game id, once it has been read
    pub id: Option<u32>,
    /// Counters of the group being scanned when the scan stopped
    pub tally: CubeSet,
    /// Whether the game was possible
    pub verdict: Verdict,
}

impl GameReport {
    /// The game id if the game was possible
    pub fn possible_id(&self) -> Option<u32> {
        match self.verdict {
            Verdict::Possible => self.id,
            _ => None,
        }
    }

    /// True if every group fit in the bag
    pub fn is_possible(&self) -> bool {
        self.verdict == Verdict::Possible
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "game {}: {} [{}]", id, self.verdict, self.tally),
            None => write!(f, "game ?: {}", self.verdict),
        }
    }
}

/// Scratch state for the record being scanned
#[derive(Debug, Default)]
struct RecordState {
    id: Option<u32>,
    tally: CubeSet,
}

/// Single-pass validator for cube game records
#[derive(Debug, Clone, Default)]
pub struct GameScanner {
    rules: GameRules,
}

impl GameScanner {
    /// Creates a scanner with the standard bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner with custom rules
    pub fn with_rules(rules: GameRules) -> Self {
        Self { rules }
    }

    /// The rules this scanner judges by
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Scan and judge one record
    pub fn scan(&self, line: &[u8]) -> GameReport {
        let mut record = RecordState::default();
        let verdict = self
            .walk(line, &mut record)
            .unwrap_or_else(Verdict::Malformed);

        GameReport {
            id: record.id,
            tally: record.tally,
            verdict,
        }
    }

    fn walk(&self, line: &[u8], record: &mut RecordState) -> Result<Verdict, MalformedRecord> {
        let mut cursor = ByteCursor::new(line);

        if !cursor.eat_literal(GAME_PREFIX) {
            return Err(MalformedRecord::MissingPrefix);
        }
        cursor.skip_blanks();
        let id = cursor.parse_decimal().map_err(|e| match e {
            DecimalError::NoDigits => MalformedRecord::MissingId,
            DecimalError::Overflow => MalformedRecord::IdOverflow,
        })?;
        record.id = Some(id);
        if !cursor.eat_byte(b':') {
            return Err(MalformedRecord::MissingColon);
        }

        // count and its offset, waiting for a colour word
        let mut pending: Option<(u32, usize)> = None;
        let mut group = 0;

        while let Some(byte) = cursor.peek().filter(|&b| b != b'\n') {
            let offset = cursor.position();
            match byte {
                b' ' | b',' | b'\r' | b'\t' => cursor.advance(1),
                b'0'..=b'9' => {
                    claimed(pending)?;
                    let count = cursor
                        .parse_decimal()
                        .map_err(|_| MalformedRecord::CountOverflow { offset })?;
                    if count == 0 && self.rules.zero_counts == ZeroCountPolicy::Reject {
                        return Err(MalformedRecord::ZeroCount { offset });
                    }
                    pending = Some((count, offset));
                }
                b';' => {
                    claimed(pending)?;
                    if !self.rules.limits.admits(&record.tally) {
                        return Ok(Verdict::Impossible { group });
                    }
                    trace!("Group {} of game {} fits: {}", group, id, record.tally);
                    record.tally = CubeSet::default();
                    group += 1;
                    cursor.advance(1);
                }
                _ => {
                    let colour = Colour::from_initial(byte)
                        .ok_or(MalformedRecord::UnexpectedByte { offset, byte })?;
                    let (count, _) = pending
                        .take()
                        .ok_or(MalformedRecord::MissingCount { offset, colour })?;
                    record.tally.add(colour, count);
                    cursor.advance(colour.word_len());
                }
            }
        }

        claimed(pending)?;
        if self.rules.limits.admits(&record.tally) {
            Ok(Verdict::Possible)
        } else {
            Ok(Verdict::Impossible { group })
        }
    }
}

/// Fails if a count is still waiting for its colour
fn claimed(pending: Option<(u32, usize)>) -> Result<(), MalformedRecord> {
    match pending {
        Some((_, offset)) => Err(MalformedRecord::DanglingCount { offset }),
        None => Ok(()),
    }
}

impl LineScanner for GameScanner {
    type Outcome = GameReport;

    fn scan_line(&self, line: &[u8]) -> GameReport {
        let report = self.scan(line);
        match report.verdict {
            Verdict::Malformed(reason) => warn!("Skipping malformed record: {}", reason),
            _ => debug!("{}", report),
        }
        report
    }

    fn contribution(&self, outcome: &GameReport) -> u64 {
        outcome.possible_id().map_or(0, u64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{scan_reader, ScanSummary};
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    fn scan(line: &str) -> GameReport {
        GameScanner::new().scan(line.as_bytes())
    }

    #[test]
    fn test_example_sum() {
        let mut possible = Vec::new();
        let summary = scan_reader(&GameScanner::new(), EXAMPLE.as_bytes(), |_, report| {
            if let Some(id) = report.possible_id() {
                possible.push(id);
            }
        })
        .unwrap();

        assert_eq!(possible, vec![1, 2, 5]);
        assert_eq!(summary.total, 8);
        assert_eq!(summary.lines, 5);
        assert_eq!(summary.counted, 3);
    }

    #[test]
    fn test_possible_game_reports_final_group() {
        let report = scan("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green");
        assert_eq!(
            report,
            GameReport {
                id: Some(1),
                tally: CubeSet::new(0, 2, 0),
                verdict: Verdict::Possible,
            }
        );
    }

    #[test]
    fn test_impossible_games() {
        let report = scan("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red");
        assert_eq!(report.verdict, Verdict::Impossible { group: 0 });
        assert_eq!(report.tally, CubeSet::new(20, 8, 6));

        let report = scan("Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red");
        assert_eq!(report.verdict, Verdict::Impossible { group: 2 });
        assert_eq!(report.possible_id(), None);
    }

    #[test]
    fn test_short_circuits_on_first_failing_group() {
        // both groups fail; the first one decides and the second is never tallied
        let report = scan("Game 7: 13 red; 99 blue, 99 green");
        assert_eq!(report.verdict, Verdict::Impossible { group: 0 });
        assert_eq!(report.tally, CubeSet::new(13, 0, 0));

        // the unreadable tail is never reached either
        let report = scan("Game 8: 15 blue; ???");
        assert_eq!(report.verdict, Verdict::Impossible { group: 0 });
    }

    #[test]
    fn test_counts_reset_between_groups() {
        let report = scan("Game 9: 12 red, 13 green, 14 blue; 12 red; 13 green");
        assert_eq!(report.verdict, Verdict::Possible);
        assert_eq!(report.tally, CubeSet::new(0, 13, 0));
    }

    #[test]
    fn test_repeated_colour_accumulates_within_group() {
        let report = scan("Game 2: 7 red, 6 red");
        assert_eq!(report.verdict, Verdict::Impossible { group: 0 });
        assert_eq!(report.tally.red, 13);
    }

    #[test]
    fn test_zero_count_rejects_record() {
        let report = scan("Game 1: 0 red");
        assert_eq!(
            report.verdict,
            Verdict::Malformed(MalformedRecord::ZeroCount { offset: 8 })
        );
        assert_eq!(report.id, Some(1));
        assert_eq!(GameScanner::new().contribution(&report), 0);

        let report = scan("Game 5: 3 blue; 1 red, 0 green");
        assert!(matches!(
            report.verdict,
            Verdict::Malformed(MalformedRecord::ZeroCount { .. })
        ));
    }

    #[test]
    fn test_zero_count_accepted_when_configured() {
        let scanner =
            GameScanner::with_rules(GameRules::new().zero_counts(ZeroCountPolicy::Accept));
        let report = scanner.scan(b"Game 1: 0 red, 2 blue");
        assert_eq!(report.verdict, Verdict::Possible);
        assert_eq!(report.tally, CubeSet::new(0, 0, 2));
        assert_eq!(scanner.contribution(&report), 1);
    }

    #[test]
    fn test_custom_limits() {
        let scanner = GameScanner::with_rules(GameRules::new().limits(BagLimits::new(1, 1, 1)));
        assert!(scanner.scan(b"Game 4: 1 red, 1 green, 1 blue").is_possible());
        assert!(!scanner.scan(b"Game 4: 2 red").is_possible());
    }

    #[test]
    fn test_colour_identified_by_initial_only() {
        let report = scan("Game 6: 3 rad, 2 bxxx, 1 gxxxx");
        assert_eq!(report.verdict, Verdict::Possible);
        assert_eq!(report.tally, CubeSet::new(3, 1, 2));
    }

    #[test]
    fn test_malformed_records() {
        let cases = [
            ("Round 1: 3 red", MalformedRecord::MissingPrefix),
            ("Game : 3 red", MalformedRecord::MissingId),
            ("Game 99999999999: 3 red", MalformedRecord::IdOverflow),
            ("Game 1 3 red", MalformedRecord::MissingColon),
            (
                "Game 1: 3 yellow",
                MalformedRecord::UnexpectedByte {
                    offset: 10,
                    byte: b'y',
                },
            ),
            (
                "Game 1: red",
                MalformedRecord::MissingCount {
                    offset: 8,
                    colour: Colour::Red,
                },
            ),
            (
                "Game 1: 3 red, blue",
                MalformedRecord::MissingCount {
                    offset: 15,
                    colour: Colour::Blue,
                },
            ),
            (
                "Game 1: 99999999999 red",
                MalformedRecord::CountOverflow { offset: 8 },
            ),
        ];

        for (line, reason) in cases {
            assert_eq!(scan(line).verdict, Verdict::Malformed(reason), "{line}");
        }
    }

    #[test]
    fn test_count_without_colour_rejects_record() {
        let cases = [
            ("Game 1: 3 4 red", 8),
            ("Game 1: 5 red, 7", 15),
            ("Game 1: 5 red, 7; 2 blue", 15),
        ];

        for (line, offset) in cases {
            let report = scan(line);
            assert_eq!(
                report.verdict,
                Verdict::Malformed(MalformedRecord::DanglingCount { offset }),
                "{line}"
            );
            assert_eq!(report.possible_id(), None);
        }
    }

    #[test]
    fn test_game_id_zero_is_possible_but_adds_nothing() {
        let report = scan("Game 0: 3 red");
        assert_eq!(report.verdict, Verdict::Possible);
        assert_eq!(report.id, Some(0));
        assert_eq!(report.possible_id(), Some(0));

        let scanner = GameScanner::new();
        assert_eq!(scanner.contribution(&report), 0);

        let summary = scan_reader(&scanner, &b"Game 0: 3 red\nGame 2: 1 blue\n"[..], |_, _| {})
            .unwrap();
        assert_eq!(
            summary,
            ScanSummary {
                lines: 2,
                counted: 1,
                total: 2
            }
        );
    }

    #[test]
    fn test_line_endings() {
        assert!(scan("Game 1: 3 red\r").is_possible());
        assert!(scan("Game 1: 3 red\n; 20 blue").is_possible());
        assert_eq!(scan("Game 1:").verdict, Verdict::Possible);
    }

    #[test]
    fn test_empty_input() {
        let summary = scan_reader(&GameScanner::new(), &b""[..], |_, _| {}).unwrap();
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_report_display() {
        assert_eq!(
            scan("Game 3: 20 red, 8 green").to_string(),
            "game 3: impossible at group 1 [red 20, green 8, blue 0]"
        );
        assert_eq!(
            scan("Game 5: 1 blue").to_string(),
            "game 5: possible [red 0, green 0, blue 1]"
        );
        assert_eq!(
            scan("nonsense").to_string(),
            "game ?: malformed (line does not start with \"Game\")"
        );
    }
}
