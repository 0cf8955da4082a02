//! Cube colours, per-group tallies, and the bag limits groups are judged by.

use std::fmt;

/// The three cube colours a game record may mention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// `red`
    Red,
    /// `green`
    Green,
    /// `blue`
    Blue,
}

impl Colour {
    /// Identifies a colour word by its first byte alone.
    ///
    /// The three words start with distinct letters, so one byte is enough
    /// within the closed record grammar.
    pub fn from_initial(byte: u8) -> Option<Self> {
        match byte {
            b'r' => Some(Colour::Red),
            b'g' => Some(Colour::Green),
            b'b' => Some(Colour::Blue),
            _ => None,
        }
    }

    /// The colour word as it appears in records
    pub fn as_str(&self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
        }
    }

    /// Bytes to skip from the initial letter to just past the word
    pub fn word_len(&self) -> usize {
        self.as_str().len()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cubes of each colour revealed in one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    /// Red cubes
    pub red: u32,
    /// Green cubes
    pub green: u32,
    /// Blue cubes
    pub blue: u32,
}

impl CubeSet {
    /// Creates a cube set from explicit counts
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Adds `count` cubes of `colour`
    pub fn add(&mut self, colour: Colour, count: u32) {
        let slot = match colour {
            Colour::Red => &mut self.red,
            Colour::Green => &mut self.green,
            Colour::Blue => &mut self.blue,
        };
        *slot = slot.saturating_add(count);
    }
}

impl fmt::Display for CubeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red {}, green {}, blue {}",
            self.red, self.green, self.blue
        )
    }
}

/// The most cubes of each colour the bag holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagLimits {
    /// Maximum per colour
    pub max: CubeSet,
}

impl BagLimits {
    /// 12 red, 13 green, 14 blue
    pub const STANDARD: Self = Self {
        max: CubeSet::new(12, 13, 14),
    };

    /// Creates limits from explicit per-colour maxima
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self {
            max: CubeSet::new(red, green, blue),
        }
    }

    /// True if a group could have been drawn from this bag
    pub fn admits(&self, group: &CubeSet) -> bool {
        group.red <= self.max.red && group.green <= self.max.green && group.blue <= self.max.blue
    }
}

impl Default for BagLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How a count of exactly zero (`0 red`) is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroCountPolicy {
    /// The whole record is malformed
    #[default]
    Reject,
    /// Zero is an ordinary count
    Accept,
}

/// Configuration for the game scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRules {
    /// Limits every group is judged against
    pub limits: BagLimits,
    /// Treatment of zero counts
    pub zero_counts: ZeroCountPolicy,
}

impl GameRules {
    /// Creates rules with the standard bag and zero counts rejected
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bag limits
    pub fn limits(mut self, limits: BagLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the zero-count policy
    pub fn zero_counts(mut self, policy: ZeroCountPolicy) -> Self {
        self.zero_counts = policy;
        self
    }
}
