//! Style axes: the independent dimensions a combination is built from.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// One stylistic dimension of a math alphanumeric alphabet.
///
/// Variants are declared in lexicographic order of their canonical names, so
/// the derived `Ord` sorts axes the same way the registry keys are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleAxis {
    Bold,
    DoubleStruck,
    Fraktur,
    Italic,
    MonoSpace,
    RegionalIndicator,
    SansSerif,
    Script,
}

impl StyleAxis {
    /// All axes in canonical order.
    pub const ALL: [StyleAxis; 8] = [
        StyleAxis::Bold,
        StyleAxis::DoubleStruck,
        StyleAxis::Fraktur,
        StyleAxis::Italic,
        StyleAxis::MonoSpace,
        StyleAxis::RegionalIndicator,
        StyleAxis::SansSerif,
        StyleAxis::Script,
    ];

    /// Canonical lowercase name, used to build registry keys.
    pub fn name(&self) -> &'static str {
        match self {
            StyleAxis::Bold => "bold",
            StyleAxis::DoubleStruck => "doublestruck",
            StyleAxis::Fraktur => "fraktur",
            StyleAxis::Italic => "italic",
            StyleAxis::MonoSpace => "monospace",
            StyleAxis::RegionalIndicator => "regionalindicator",
            StyleAxis::SansSerif => "sansserif",
            StyleAxis::Script => "script",
        }
    }

    /// Parse an axis name.
    ///
    /// Matching is case-insensitive and ignores `-`, `_` and spaces, so
    /// `double-struck`, `Sans_Serif` and `MONOSPACE` are all accepted.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL.into_iter().find(|axis| axis.name() == normalized)
    }
}

impl fmt::Display for StyleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::UnknownAxis(s.to_string()))
    }
}
