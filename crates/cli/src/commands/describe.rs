//! Describe each character of the input.

use std::io::{BufWriter, Write, stdout};

use anyhow::Result;
use char_info::CharInfo;
use log::info;

use crate::{cli::InputArgs, io::InputSource};

pub fn describe(input: &InputArgs) -> Result<()> {
    let mut out = BufWriter::new(stdout().lock());
    for source in InputSource::from_args(input) {
        info!("Describing {source}");
        source.for_each_line(|line, _| write_descriptions(&mut out, line))?;
    }
    out.flush()?;
    Ok(())
}

/// One tab-separated line per character of `text`.
pub fn write_descriptions(out: &mut impl Write, text: &str) -> Result<()> {
    for c in text.chars() {
        writeln!(out, "{}", CharInfo::of(c))?;
    }
    Ok(())
}
