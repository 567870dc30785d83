//! Digit extraction.
//!
//! Every other rule in the engine starts from the same canonical form:
//! the ASCII digits of the input, in order, with everything else dropped.

use std::fmt;
use std::ops::Deref;

/// Removes every character that is not an ASCII digit.
///
/// Total over any input: punctuation, letters, whitespace and non-ASCII
/// digits (e.g. `٣`) are all discarded.
pub fn unformat(display: &str) -> String {
    display.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Canonical digit-only form of an input value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Extracts the digits of `input`.
    pub fn from_input(input: &str) -> Self {
        Self(unformat(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of each digit, in order.
    pub fn values(&self) -> Vec<u32> {
        self.0.bytes().map(|b| u32::from(b - b'0')).collect()
    }

    /// True when every digit equals the first one. Empty input is not
    /// considered repeated.
    pub fn is_repeated(&self) -> bool {
        let bytes = self.0.as_bytes();
        match bytes.first() {
            Some(first) => bytes.iter().all(|b| b == first),
            None => false,
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for DigitString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DigitString {
    fn from(input: &str) -> Self {
        Self::from_input(input)
    }
}
