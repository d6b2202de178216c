//! List registered style combinations.

use std::io::{Write, stdout};

use anyhow::Result;
use script_convert::{StyleCombination, Transformer};

const SAMPLE: &str = "ABC xyz 0123";

pub fn list_styles() -> Result<()> {
    write_styles(&mut stdout().lock())
}

/// One line per combination: its name and a sample rendering.
pub fn write_styles(out: &mut impl Write) -> Result<()> {
    for combination in StyleCombination::all() {
        let sample = Transformer::new(combination).transform_str(SAMPLE);
        writeln!(out, "{:<22}{sample}", combination.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_styles() {
        let mut out = Vec::new();
        write_styles(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], format!("{:<22}{SAMPLE}", "plain"));
        assert!(lines.iter().any(|l| l.starts_with("regionalindicator") && l.contains('\u{1F1E6}')));
    }
}
