//! Error types for style resolution and line conversion.

use std::result;

use crate::StyleAxis;

/// Errors that can occur while resolving a style or converting text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no style combination registered for {}", format_axes(.0))]
    NoSuchCombination(Vec<StyleAxis>),

    #[error("unknown style axis '{0}'")]
    UnknownAxis(String),

    #[error("line {line}: '{ch}' (U+{:04X}) is a letter from block '{block}', not Basic Latin", code_point(.ch))]
    StrictViolation { ch: char, line: usize, block: String },
}

pub type Result<T> = result::Result<T, Error>;

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

fn format_axes(axes: &[StyleAxis]) -> String {
    if axes.is_empty() {
        return "no axes".to_string();
    }
    axes.iter().map(StyleAxis::name).collect::<Vec<_>>().join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_combination_message() {
        let err = Error::NoSuchCombination(vec![StyleAxis::Fraktur, StyleAxis::Italic]);
        assert_eq!(err.to_string(), "no style combination registered for fraktur+italic");
    }

    #[test]
    fn test_strict_violation_message() {
        let err = Error::StrictViolation { ch: 'é', line: 3, block: "Latin-1 Supplement".into() };
        assert_eq!(
            err.to_string(),
            "line 3: 'é' (U+00E9) is a letter from block 'Latin-1 Supplement', not Basic Latin"
        );
    }
}
