//! Behavioral properties of the registered alphabets.

use std::collections::HashMap;

use script_convert::{
    Error, StyleAxis, StyleCombination, Transformer, resolve, resolve_combination,
};
use StyleAxis::*;

fn basic_latin() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z').chain('0'..='9')
}

fn transformer(axes: &[StyleAxis]) -> Transformer {
    Transformer::new(resolve_combination(axes.iter().copied()).unwrap())
}

#[test]
fn test_identity_law() {
    let plain = transformer(&[]);
    for c in basic_latin() {
        assert_eq!(plain.transform(c), c);
    }
}

#[test]
fn test_every_combination_is_injective() {
    for combination in StyleCombination::all() {
        let t = Transformer::new(combination);
        let mut seen: HashMap<char, char> = HashMap::new();
        for c in basic_latin().filter(|&c| t.accepts(c)) {
            let out = t.transform(c);
            if let Some(previous) = seen.insert(out, c) {
                panic!("{combination}: '{previous}' and '{c}' both map to U+{:04X}", out as u32);
            }
        }
    }
}

#[test]
fn test_styled_output_leaves_ascii() {
    for combination in StyleCombination::all().filter(|c| *c != StyleCombination::Plain) {
        let t = Transformer::new(combination);
        for c in basic_latin().filter(|&c| t.accepts(c)) {
            assert!(!t.transform(c).is_ascii(), "{combination}: '{c}' was not styled");
        }
    }
}

#[test]
fn test_exception_precedence() {
    assert_eq!(transformer(&[Italic]).transform('h'), '\u{210E}');
    assert_eq!(transformer(&[Script]).transform('B'), '\u{212C}');
    assert_eq!(transformer(&[Fraktur]).transform('Z'), '\u{2128}');
    assert_eq!(transformer(&[DoubleStruck]).transform('R'), '\u{211D}');
}

#[test]
fn test_digit_support_gating() {
    for axes in [&[Bold][..], &[DoubleStruck], &[SansSerif], &[Bold, SansSerif], &[MonoSpace]] {
        let spec = resolve(axes.iter().copied()).unwrap();
        let expected = char::from_u32(spec.digit_base.unwrap() + 7).unwrap();
        assert_eq!(transformer(axes).transform('7'), expected, "{axes:?}");
    }
    for axes in [&[Italic][..], &[Script], &[Fraktur]] {
        assert_eq!(transformer(axes).transform('7'), '7', "{axes:?}");
    }
}

#[test]
fn test_unknown_combination_fails_closed() {
    assert!(matches!(
        resolve_combination([Fraktur, Italic]),
        Err(Error::NoSuchCombination(axes)) if axes == [Fraktur, Italic]
    ));
}

#[test]
fn test_non_letters_pass_through() {
    for combination in StyleCombination::all() {
        let t = Transformer::new(combination);
        assert_eq!(t.transform(' '), ' ');
        assert_eq!(t.transform('.'), '.');
        if !combination.spec().has_digits() {
            assert_eq!(t.transform('3'), '3', "{combination}");
        }
    }
}

#[test]
fn test_regional_indicator() {
    let t = transformer(&[RegionalIndicator]);
    assert_eq!(t.transform('a'), 'a');
    assert_eq!(t.transform('A'), '\u{1F1E6}');
    assert_eq!(t.transform_str("JP"), "\u{1F1EF}\u{1F1F5}");
}
