//! Input sources for text commands.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Cursor, stdin},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::cli::InputArgs;

/// One place lines of input are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Resolve command-line input: literal text wins, then files, then stdin.
    pub fn from_args(args: &InputArgs) -> Vec<InputSource> {
        if !args.text.is_empty() {
            return vec![InputSource::Text(args.text.join(" "))];
        }
        if !args.files.is_empty() {
            return args.files.iter().cloned().map(InputSource::File).collect();
        }
        vec![InputSource::Stdin]
    }

    /// Open the source for buffered line reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        Ok(match self {
            InputSource::Text(text) => Box::new(Cursor::new(text.clone().into_bytes())),
            InputSource::File(path) => Box::new(BufReader::new(open_file(path)?)),
            InputSource::Stdin => Box::new(stdin().lock()),
        })
    }

    /// Feed each line (without its terminator) to `f`, numbering from 1.
    pub fn for_each_line(&self, mut f: impl FnMut(&str, usize) -> Result<()>) -> Result<()> {
        let reader = self.open()?;
        for (index, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read {self}"))?;
            f(&line, index + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Text(_) => f.write_str("arguments"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => f.write_str("stdin"),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))
}
