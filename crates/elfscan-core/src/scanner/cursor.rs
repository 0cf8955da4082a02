//! Position-plus-lookahead cursor over a single line of input.
//!
//! The record scanner walks its line with fixed advance amounts (one byte
//! for separators, the full colour word after its first letter). The cursor
//! keeps those moves bounds-checked: advancing past the end clamps to the end
//! of the slice instead of reading beyond it.

/// Reasons a decimal number could not be read at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    /// The cursor was not positioned on an ASCII digit
    NoDigits,
    /// The digits did not fit in a `u32`
    Overflow,
}

/// A cursor over an immutable byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current byte offset from the start of the line
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte under the cursor without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Moves forward `n` bytes, stopping at the end of the slice
    pub fn advance(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.data.len());
    }

    /// Consumes `literal` if the remaining input starts with it
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        let matched = self.data[self.position..].starts_with(literal);
        if matched {
            self.advance(literal.len());
        }
        matched
    }

    /// Consumes a single `byte` if it is under the cursor
    pub fn eat_byte(&mut self, byte: u8) -> bool {
        let matched = self.peek() == Some(byte);
        if matched {
            self.advance(1);
        }
        matched
    }

    /// Skips ASCII spaces and tabs
    pub fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.advance(1);
        }
    }

    /// Reads an unsigned decimal number starting at the cursor.
    ///
    /// On overflow the remaining digits are still consumed, so the cursor
    /// always ends on the first non-digit byte.
    pub fn parse_decimal(&mut self) -> Result<u32, DecimalError> {
        let start = self.position;
        let mut value: Option<u32> = Some(0);

        while let Some(byte @ b'0'..=b'9') = self.peek() {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(u32::from(byte - b'0')));
            self.advance(1);
        }

        if self.position == start {
            return Err(DecimalError::NoDigits);
        }
        value.ok_or(DecimalError::Overflow)
    }
}
