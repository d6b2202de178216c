//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use script_convert::StyleAxis;

use crate::commands::{describe, list_styles, lookup_names, style};

#[derive(Parser)]
#[command(name = "unitools", version)]
#[command(about = "Look up, describe and restyle Unicode characters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where input text comes from: arguments first, then files, then stdin.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Read input from FILE (repeatable)
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,
    /// Literal input text, joined with spaces
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct StyleArgs {
    #[arg(short, long)]
    pub bold: bool,
    #[arg(short, long)]
    pub italic: bool,
    #[arg(long)]
    pub fraktur: bool,
    #[arg(long)]
    pub script: bool,
    #[arg(long)]
    pub double_struck: bool,
    #[arg(long)]
    pub sans_serif: bool,
    #[arg(long)]
    pub monospace: bool,
    #[arg(long)]
    pub regional_indicator: bool,
    /// Style names, e.g. 'bold+italic' or 'sans-serif,bold' (repeatable)
    #[arg(short, long = "style", value_name = "NAMES")]
    pub styles: Vec<String>,
    /// Fail on letters outside Basic Latin instead of leaving them unchanged
    #[arg(long)]
    pub strict: bool,
}

impl StyleArgs {
    /// Axes selected by individual flags.
    pub fn flag_axes(&self) -> Vec<StyleAxis> {
        [
            (self.bold, StyleAxis::Bold),
            (self.italic, StyleAxis::Italic),
            (self.fraktur, StyleAxis::Fraktur),
            (self.script, StyleAxis::Script),
            (self.double_struck, StyleAxis::DoubleStruck),
            (self.sans_serif, StyleAxis::SansSerif),
            (self.monospace, StyleAxis::MonoSpace),
            (self.regional_indicator, StyleAxis::RegionalIndicator),
        ]
        .into_iter()
        .filter_map(|(set, axis)| set.then_some(axis))
        .collect()
    }

    /// Flag axes and `--style` names together, as names for the resolver.
    pub fn style_names(&self) -> Vec<String> {
        self.flag_axes()
            .iter()
            .map(|axis| axis.name().to_string())
            .chain(self.styles.iter().cloned())
            .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Latin letters and digits into a styled Unicode alphabet
    Style {
        #[command(flatten)]
        style: StyleArgs,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the registered style combinations
    Styles,
    /// Print characters by Unicode name or code point
    Name {
        /// Treat each query as words to search for in character names
        #[arg(long)]
        search: bool,
        #[arg(value_name = "NAME", required = true)]
        queries: Vec<String>,
    },
    /// Show code point, name, category, script and block of each character
    Describe {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Style { style: args, input } => style(&args, &input)?,
            Commands::Styles => list_styles()?,
            Commands::Name { search, queries } => lookup_names(&queries, search)?,
            Commands::Describe { input } => describe(&input)?,
        }
        Ok(())
    }
}
