//! Full description of a single character.

use std::fmt;

use unicode_general_category::get_general_category;

use crate::classify::{block_name, category_names, script_name};

/// Everything the tool reports about one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo {
    pub ch: char,
    pub name: Option<String>,
    pub category: &'static str,
    pub category_name: &'static str,
    pub script: &'static str,
    pub block: &'static str,
}

impl CharInfo {
    pub fn of(ch: char) -> Self {
        let (category, category_name) = category_names(get_general_category(ch));
        Self {
            ch,
            name: char_name(ch),
            category,
            category_name,
            script: script_name(ch),
            block: block_name(ch),
        }
    }

    pub fn code_point(&self) -> u32 {
        self.ch as u32
    }

    /// `U+XXXX` notation, at least four hex digits.
    pub fn code_point_label(&self) -> String {
        format!("U+{:04X}", self.code_point())
    }

    /// The character itself, or an escape when printing it raw would garble a line.
    pub fn printable(&self) -> String {
        if self.ch.is_control() || self.category == "Zl" || self.category == "Zp" {
            self.ch.escape_unicode().to_string()
        } else {
            self.ch.to_string()
        }
    }

    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Tab-separated: code point, character, name, category, script, block.
impl fmt::Display for CharInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.code_point_label(),
            self.printable(),
            self.name_or_placeholder(),
            self.category,
            self.script,
            self.block
        )
    }
}

/// Unicode name of `ch`, if it has one.
pub fn char_name(ch: char) -> Option<String> {
    unicode_names2::name(ch).map(|name| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_of_letter() {
        let info = CharInfo::of('A');
        assert_eq!(info.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(info.category, "Lu");
        assert_eq!(info.category_name, "Uppercase Letter");
        assert_eq!(info.code_point_label(), "U+0041");
        assert_eq!(
            info.to_string(),
            "U+0041\tA\tLATIN CAPITAL LETTER A\tLu\tLatin\tBasic Latin"
        );
    }

    #[test]
    fn test_info_of_math_letter() {
        let info = CharInfo::of('\u{1D400}');
        assert_eq!(info.name.as_deref(), Some("MATHEMATICAL BOLD CAPITAL A"));
        assert_eq!(info.code_point_label(), "U+1D400");
        assert_eq!(info.block, "Mathematical Alphanumeric Symbols");
    }

    #[test]
    fn test_control_is_escaped() {
        let info = CharInfo::of('\t');
        assert_eq!(info.printable(), "\\u{9}");
        assert_eq!(info.category, "Cc");
    }
}
