//! Registered style combinations and their code-point recipes.
//!
//! Offsets point into the Mathematical Alphanumeric Symbols block
//! (U+1D400-U+1D7FF) and the Enclosed Alphanumeric Supplement block
//! (regional indicators, U+1F1E6-U+1F1FF). Letters that Unicode had already
//! encoded in Letterlike Symbols (U+2100-U+214F) left holes in the math
//! alphabets; those are covered by per-combination exception tables.

use std::fmt;

use crate::StyleAxis;

/// Numeric recipe for one style combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSpec {
    /// Code point of 'A' in the target alphabet.
    pub letter_base: u32,
    /// Code point of '0' in the target digits, if the style has digits.
    pub digit_base: Option<u32>,
    /// Added to `letter_base` for lowercase letters.
    pub lowercase_offset: u32,
    /// Only uppercase ASCII letters are accepted (regional indicators).
    pub uppercase_only: bool,
    /// Literal outputs that override the arithmetic rule.
    pub exceptions: &'static [(char, char)],
}

impl TransformSpec {
    /// The identity recipe: 'a' sits 32 code points after 'A' in ASCII.
    pub const IDENTITY: Self = Self {
        letter_base: 'A' as u32,
        digit_base: None,
        lowercase_offset: 32,
        uppercase_only: false,
        exceptions: &[],
    };

    const fn styled(letter_base: u32) -> Self {
        Self {
            letter_base,
            digit_base: None,
            lowercase_offset: 26,
            uppercase_only: false,
            exceptions: &[],
        }
    }

    const fn with_digits(mut self, digit_base: u32) -> Self {
        self.digit_base = Some(digit_base);
        self
    }

    const fn with_exceptions(mut self, exceptions: &'static [(char, char)]) -> Self {
        self.exceptions = exceptions;
        self
    }

    const fn uppercase_only(mut self) -> Self {
        self.uppercase_only = true;
        self
    }

    /// Literal replacement for `c`, if this recipe special-cases it.
    pub fn exception(&self, c: char) -> Option<char> {
        self.exceptions.iter().find(|(from, _)| *from == c).map(|&(_, to)| to)
    }

    pub fn has_digits(&self) -> bool {
        self.digit_base.is_some()
    }
}

const SCRIPT_EXCEPTIONS: &[(char, char)] = &[
    ('B', '\u{212C}'),
    ('E', '\u{2130}'),
    ('F', '\u{2131}'),
    ('H', '\u{210B}'),
    ('I', '\u{2110}'),
    ('L', '\u{2112}'),
    ('M', '\u{2133}'),
    ('R', '\u{211B}'),
    ('e', '\u{212F}'),
    ('g', '\u{210A}'),
    ('o', '\u{2134}'),
];

const FRAKTUR_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{212D}'),
    ('H', '\u{210C}'),
    ('I', '\u{2111}'),
    ('R', '\u{211C}'),
    ('Z', '\u{2128}'),
];

const DOUBLE_STRUCK_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];

const ITALIC_EXCEPTIONS: &[(char, char)] = &[('h', '\u{210E}')];

const BOLD: TransformSpec = TransformSpec::styled(0x1D400).with_digits(0x1D7CE);
const ITALIC: TransformSpec = TransformSpec::styled(0x1D434).with_exceptions(ITALIC_EXCEPTIONS);
const BOLD_ITALIC: TransformSpec = TransformSpec::styled(0x1D468);
const SCRIPT: TransformSpec = TransformSpec::styled(0x1D49C).with_exceptions(SCRIPT_EXCEPTIONS);
const BOLD_SCRIPT: TransformSpec = TransformSpec::styled(0x1D4D0);
const FRAKTUR: TransformSpec = TransformSpec::styled(0x1D504).with_exceptions(FRAKTUR_EXCEPTIONS);
const DOUBLE_STRUCK: TransformSpec = TransformSpec::styled(0x1D538)
    .with_digits(0x1D7D8)
    .with_exceptions(DOUBLE_STRUCK_EXCEPTIONS);
const BOLD_FRAKTUR: TransformSpec = TransformSpec::styled(0x1D56C);
const SANS_SERIF: TransformSpec = TransformSpec::styled(0x1D5A0).with_digits(0x1D7E2);
const BOLD_SANS_SERIF: TransformSpec = TransformSpec::styled(0x1D5D4).with_digits(0x1D7EC);
const ITALIC_SANS_SERIF: TransformSpec = TransformSpec::styled(0x1D608);
const BOLD_ITALIC_SANS_SERIF: TransformSpec = TransformSpec::styled(0x1D63C);
// U+1D670 is MATHEMATICAL MONOSPACE CAPITAL A; small a follows at U+1D68A.
const MONOSPACE: TransformSpec = TransformSpec::styled(0x1D670).with_digits(0x1D7F6);
const REGIONAL_INDICATOR: TransformSpec = TransformSpec::styled(0x1F1E6).uppercase_only();

/// A registered set of style axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCombination {
    Plain,
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    DoubleStruck,
    BoldFraktur,
    SansSerif,
    BoldSansSerif,
    ItalicSansSerif,
    BoldItalicSansSerif,
    MonoSpace,
    RegionalIndicator,
}

/// Composite key (sorted axis names, concatenated) to combination.
const REGISTRY: &[(&str, StyleCombination)] = &[
    ("", StyleCombination::Plain),
    ("bold", StyleCombination::Bold),
    ("italic", StyleCombination::Italic),
    ("bolditalic", StyleCombination::BoldItalic),
    ("script", StyleCombination::Script),
    ("boldscript", StyleCombination::BoldScript),
    ("fraktur", StyleCombination::Fraktur),
    ("doublestruck", StyleCombination::DoubleStruck),
    ("boldfraktur", StyleCombination::BoldFraktur),
    ("sansserif", StyleCombination::SansSerif),
    ("boldsansserif", StyleCombination::BoldSansSerif),
    ("italicsansserif", StyleCombination::ItalicSansSerif),
    ("bolditalicsansserif", StyleCombination::BoldItalicSansSerif),
    ("monospace", StyleCombination::MonoSpace),
    ("regionalindicator", StyleCombination::RegionalIndicator),
];

impl StyleCombination {
    /// Every registered combination, identity first.
    pub fn all() -> impl Iterator<Item = StyleCombination> {
        REGISTRY.iter().map(|&(_, combination)| combination)
    }

    /// Look up a combination by its composite key.
    pub fn from_key(key: &str) -> Option<Self> {
        REGISTRY.iter().find(|(k, _)| *k == key).map(|&(_, combination)| combination)
    }

    /// Axes making up this combination, in canonical order.
    pub fn axes(&self) -> &'static [StyleAxis] {
        use StyleAxis as A;
        match self {
            StyleCombination::Plain => &[],
            StyleCombination::Bold => &[A::Bold],
            StyleCombination::Italic => &[A::Italic],
            StyleCombination::BoldItalic => &[A::Bold, A::Italic],
            StyleCombination::Script => &[A::Script],
            StyleCombination::BoldScript => &[A::Bold, A::Script],
            StyleCombination::Fraktur => &[A::Fraktur],
            StyleCombination::DoubleStruck => &[A::DoubleStruck],
            StyleCombination::BoldFraktur => &[A::Bold, A::Fraktur],
            StyleCombination::SansSerif => &[A::SansSerif],
            StyleCombination::BoldSansSerif => &[A::Bold, A::SansSerif],
            StyleCombination::ItalicSansSerif => &[A::Italic, A::SansSerif],
            StyleCombination::BoldItalicSansSerif => &[A::Bold, A::Italic, A::SansSerif],
            StyleCombination::MonoSpace => &[A::MonoSpace],
            StyleCombination::RegionalIndicator => &[A::RegionalIndicator],
        }
    }

    /// Composite registry key for this combination.
    pub fn key(&self) -> String {
        composite_key(self.axes())
    }

    pub fn spec(&self) -> &'static TransformSpec {
        match self {
            StyleCombination::Plain => &TransformSpec::IDENTITY,
            StyleCombination::Bold => &BOLD,
            StyleCombination::Italic => &ITALIC,
            StyleCombination::BoldItalic => &BOLD_ITALIC,
            StyleCombination::Script => &SCRIPT,
            StyleCombination::BoldScript => &BOLD_SCRIPT,
            StyleCombination::Fraktur => &FRAKTUR,
            StyleCombination::DoubleStruck => &DOUBLE_STRUCK,
            StyleCombination::BoldFraktur => &BOLD_FRAKTUR,
            StyleCombination::SansSerif => &SANS_SERIF,
            StyleCombination::BoldSansSerif => &BOLD_SANS_SERIF,
            StyleCombination::ItalicSansSerif => &ITALIC_SANS_SERIF,
            StyleCombination::BoldItalicSansSerif => &BOLD_ITALIC_SANS_SERIF,
            StyleCombination::MonoSpace => &MONOSPACE,
            StyleCombination::RegionalIndicator => &REGIONAL_INDICATOR,
        }
    }
}

impl fmt::Display for StyleCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes = self.axes();
        if axes.is_empty() {
            return f.write_str("plain");
        }
        let names: Vec<_> = axes.iter().map(StyleAxis::name).collect();
        f.write_str(&names.join("+"))
    }
}

/// Concatenate axis names of an already canonical (sorted, deduplicated) slice.
pub(crate) fn composite_key(axes: &[StyleAxis]) -> String {
    axes.iter().map(StyleAxis::name).collect()
}
