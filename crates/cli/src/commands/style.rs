//! Convert text into a styled alphabet.

use std::io::{BufWriter, Write, stdout};

use anyhow::{Context, Result};
use char_info::UnicodeClassifier;
use log::info;
use script_convert::{ConvertOptions, LineTransformer, Transformer, resolve_names};

use crate::{
    cli::{InputArgs, StyleArgs},
    io::InputSource,
};

/// Run the `style` command, writing converted lines to stdout.
pub fn style(args: &StyleArgs, input: &InputArgs) -> Result<()> {
    let combination = resolve_names(args.style_names()).context("Invalid style")?;
    let converter = LineTransformer::new(
        Transformer::new(combination),
        UnicodeClassifier,
        ConvertOptions::new().strict(args.strict),
    );

    let mut out = BufWriter::new(stdout().lock());
    for source in InputSource::from_args(input) {
        info!("Converting {source} as {combination}");
        let lines = convert_source(&converter, &source, &mut out)?;
        info!("Converted {lines} lines from {source}");
    }
    out.flush()?;
    Ok(())
}

/// Convert every line of `source` into `out`. Returns the number of lines.
pub fn convert_source(
    converter: &LineTransformer<UnicodeClassifier>,
    source: &InputSource,
    out: &mut impl Write,
) -> Result<usize> {
    let mut count = 0;
    source.for_each_line(|line, number| {
        let converted = converter
            .transform_line(line, number)
            .with_context(|| format!("Failed to convert {source}"))?;
        writeln!(out, "{converted}")?;
        count += 1;
        Ok(())
    })?;
    Ok(count)
}
