//! Fixed values shared by the resolver and the line policy.

/// Separators accepted between axis names in a compound style string.
pub const COMPOUND_SEPARATORS: &[char] = &[',', '+'];

/// Block name of U+0000-U+007F as reported by the classifier.
pub const BASIC_LATIN_BLOCK: &str = "Basic Latin";
