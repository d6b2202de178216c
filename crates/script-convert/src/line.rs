//! Line-level conversion with the strict/lenient letter policy.

use log::debug;

use crate::{Error, Result, Transformer, config::BASIC_LATIN_BLOCK};

/// Unicode metadata for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Two-letter general category abbreviation, e.g. `Lu` or `Nd`.
    pub category: &'static str,
    /// Script name, e.g. `Latin`.
    pub script: &'static str,
    /// Block name, e.g. `Basic Latin`.
    pub block: &'static str,
}

impl Classification {
    pub fn is_letter(&self) -> bool {
        self.category.starts_with('L')
    }

    pub fn is_basic_latin(&self) -> bool {
        self.block == BASIC_LATIN_BLOCK
    }
}

/// Source of Unicode metadata. `None` means the character is unclassifiable.
pub trait Classifier {
    fn classify(&self, c: char) -> Option<Classification>;
}

impl<F> Classifier for F
where
    F: Fn(char) -> Option<Classification>,
{
    fn classify(&self, c: char) -> Option<Classification> {
        self(c)
    }
}

/// Options for converting text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Abort on letters outside Basic Latin instead of passing them through.
    pub strict: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Applies a [`Transformer`] across lines of text.
#[derive(Debug, Clone)]
pub struct LineTransformer<C> {
    transformer: Transformer,
    classifier: C,
    options: ConvertOptions,
}

impl<C: Classifier> LineTransformer<C> {
    pub fn new(transformer: Transformer, classifier: C, options: ConvertOptions) -> Self {
        debug!("converting as {} (strict: {})", transformer.combination(), options.strict);
        Self { transformer, classifier, options }
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert one character; `line` is only used for error reporting.
    pub fn transform_char(&self, c: char, line: usize) -> Result<char> {
        let Some(class) = self.classifier.classify(c) else {
            return Ok(c);
        };

        // Digits are the only non-letters a transformer accepts.
        if !class.is_letter() {
            return Ok(self.transformer.transform(c));
        }

        if !class.is_basic_latin() {
            if self.options.strict {
                return Err(Error::StrictViolation { ch: c, line, block: class.block.to_string() });
            }
            return Ok(c);
        }

        Ok(self.transformer.transform(c))
    }

    /// Convert a single line. `line_number` is 1-based.
    pub fn transform_line(&self, line: &str, line_number: usize) -> Result<String> {
        line.chars().map(|c| self.transform_char(c, line_number)).collect()
    }

    /// Convert a stream of lines lazily, numbering them from 1.
    ///
    /// The iterator ends after the first error.
    pub fn transform_lines<'a, I, S>(&'a self, lines: I) -> TransformLines<'a, C, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str>,
    {
        TransformLines { inner: self, lines: lines.into_iter(), line_number: 0, failed: false }
    }

    /// Convert multi-line text, keeping its line breaks.
    pub fn transform_text(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        for (i, segment) in text.split_inclusive('\n').enumerate() {
            let (body, ending) = match segment.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (segment, ""),
            };
            out.push_str(&self.transform_line(body, i + 1)?);
            out.push_str(ending);
        }
        Ok(out)
    }
}

/// Iterator returned by [`LineTransformer::transform_lines`].
pub struct TransformLines<'a, C, I> {
    inner: &'a LineTransformer<C>,
    lines: I,
    line_number: usize,
    failed: bool,
}

impl<C, I, S> Iterator for TransformLines<'_, C, I>
where
    C: Classifier,
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self.lines.next()?;
        self.line_number += 1;
        let result = self.inner.transform_line(line.as_ref(), self.line_number);
        self.failed = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleCombination;

    /// Enough of the Unicode tables for Basic Latin and Latin-1.
    fn latin(c: char) -> Option<Classification> {
        let block = match c as u32 {
            0x00..=0x7F => "Basic Latin",
            0x80..=0xFF => "Latin-1 Supplement",
            _ => return None,
        };
        let category = if c.is_uppercase() {
            "Lu"
        } else if c.is_lowercase() {
            "Ll"
        } else if c.is_ascii_digit() {
            "Nd"
        } else {
            "Po"
        };
        Some(Classification { category, script: "Latin", block })
    }

    fn bold(strict: bool) -> LineTransformer<fn(char) -> Option<Classification>> {
        LineTransformer::new(
            Transformer::new(StyleCombination::Bold),
            latin as fn(char) -> Option<Classification>,
            ConvertOptions::new().strict(strict),
        )
    }

    #[test]
    fn test_lenient_skips_non_basic_latin_letters() {
        assert_eq!(bold(false).transform_line("café", 1).unwrap(), "𝐜𝐚𝐟é");
    }

    #[test]
    fn test_strict_reports_position() {
        let err = bold(true).transform_line("café", 4).unwrap_err();
        assert_eq!(
            err,
            Error::StrictViolation { ch: 'é', line: 4, block: "Latin-1 Supplement".into() }
        );
    }

    #[test]
    fn test_digits_converted_when_supported() {
        assert_eq!(bold(true).transform_line("a1.", 1).unwrap(), "𝐚𝟏.");
    }

    #[test]
    fn test_unclassified_passes_through() {
        assert_eq!(bold(true).transform_line("a→b", 1).unwrap(), "𝐚→𝐛");
    }

    #[test]
    fn test_transform_lines_numbers_and_stops() {
        let t = bold(true);
        let results: Vec<_> = t.transform_lines(["ok", "naïve", "never"]).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Ok("𝐨𝐤".to_string()));
        assert!(matches!(results[1], Err(Error::StrictViolation { ch: 'ï', line: 2, .. })));
    }

    #[test]
    fn test_transform_text_keeps_line_breaks() {
        assert_eq!(bold(false).transform_text("ab\ncd\n").unwrap(), "𝐚𝐛\n𝐜𝐝\n");
        let err = bold(true).transform_text("ab\nçd").unwrap_err();
        assert!(matches!(err, Error::StrictViolation { line: 2, .. }));
    }
}
