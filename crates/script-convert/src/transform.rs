//! Per-character conversion for a resolved combination.

use crate::{StyleCombination, TransformSpec};

/// Converts single characters into one styled alphabet.
///
/// Stateless once built: the same input always yields the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformer {
    combination: StyleCombination,
    spec: &'static TransformSpec,
}

impl Transformer {
    pub fn new(combination: StyleCombination) -> Self {
        Self { combination, spec: combination.spec() }
    }

    pub fn combination(&self) -> StyleCombination {
        self.combination
    }

    pub fn spec(&self) -> &'static TransformSpec {
        self.spec
    }

    /// Whether `c` has a styled form in this alphabet.
    pub fn accepts(&self, c: char) -> bool {
        if self.spec.uppercase_only {
            return c.is_ascii_uppercase();
        }
        c.is_ascii_alphabetic() || (c.is_ascii_digit() && self.spec.has_digits())
    }

    /// Styled form of `c`, or `c` itself when it is not accepted.
    pub fn transform(&self, c: char) -> char {
        if !self.accepts(c) {
            return c;
        }
        if let Some(literal) = self.spec.exception(c) {
            return literal;
        }

        let (base, source, offset) = match (c.is_ascii_digit(), self.spec.digit_base) {
            (true, Some(digit_base)) => (digit_base, '0', 0),
            _ if c.is_ascii_lowercase() => (self.spec.letter_base, 'a', self.spec.lowercase_offset),
            _ => (self.spec.letter_base, 'A', 0),
        };
        char::from_u32(base + offset + (c as u32 - source as u32)).unwrap_or(c)
    }

    /// Convert every character of `text`, leaving unaccepted ones alone.
    pub fn transform_str(&self, text: &str) -> String {
        text.chars().map(|c| self.transform(c)).collect()
    }
}

impl From<StyleCombination> for Transformer {
    fn from(combination: StyleCombination) -> Self {
        Self::new(combination)
    }
}
