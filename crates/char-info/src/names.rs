//! Name-based character lookup and search.

use log::debug;
use rayon::prelude::*;

use crate::{CharInfo, Error, Result, info::char_name};

/// Highest Unicode code point.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Find a character by its Unicode name or by code point.
///
/// Names match case-insensitively (`greek small letter alpha`). Code points
/// may be written `U+03B1` or `0x3B1`.
pub fn lookup(query: &str) -> Result<char> {
    let query = query.trim();
    if let Some(hex) = strip_code_point_prefix(query) {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Error::InvalidCodePoint(query.to_string()));
    }
    unicode_names2::character(&query.to_uppercase())
        .ok_or_else(|| Error::UnknownName(query.to_string()))
}

fn strip_code_point_prefix(query: &str) -> Option<&str> {
    ["U+", "u+", "0x", "0X"].iter().find_map(|prefix| query.strip_prefix(prefix))
}

/// All named characters whose name contains every word of `query`.
///
/// Matching is case-insensitive; results are in code-point order.
pub fn search(query: &str) -> Vec<CharInfo> {
    let words: Vec<String> = query.split_whitespace().map(str::to_uppercase).collect();
    if words.is_empty() {
        return Vec::new();
    }

    let matches: Vec<CharInfo> = (0..=MAX_CODE_POINT)
        .into_par_iter()
        .filter_map(char::from_u32)
        .filter(|&c| {
            char_name(c).is_some_and(|name| words.iter().all(|w| name.contains(w.as_str())))
        })
        .map(CharInfo::of)
        .collect();

    debug!("search '{query}' matched {} characters", matches.len());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("LATIN SMALL LETTER A"), Ok('a'));
        assert_eq!(lookup("greek small letter alpha"), Ok('α'));
        assert_eq!(lookup("  mathematical bold capital a "), Ok('\u{1D400}'));
    }

    #[test]
    fn test_lookup_by_code_point() {
        assert_eq!(lookup("U+1F1E6"), Ok('\u{1F1E6}'));
        assert_eq!(lookup("0x41"), Ok('A'));
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(lookup("NO SUCH THING"), Err(Error::UnknownName("NO SUCH THING".into())));
        assert_eq!(lookup("U+D800"), Err(Error::InvalidCodePoint("U+D800".into())));
        assert_eq!(lookup("U+zz"), Err(Error::InvalidCodePoint("U+zz".into())));
    }

    #[test]
    fn test_search_words_in_any_order() {
        let found: Vec<char> = search("fraktur capital").iter().map(|info| info.ch).collect();
        assert!(found.contains(&'\u{1D504}'));
        assert!(found.contains(&'\u{1D56C}'));
        assert!(found.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_empty_query() {
        assert!(search("   ").is_empty());
    }
}
