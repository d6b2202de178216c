//! Unicode character information: names, general categories, scripts and blocks.
//!
//! Provides [`UnicodeClassifier`], the classifier used when converting text
//! with `script_convert`.

mod classify;
mod error;
mod info;
mod names;

pub use classify::{NO_BLOCK, UnicodeClassifier, block_name, category_names, classify, script_name};
pub use error::{Error, Result};
pub use info::{CharInfo, char_name};
pub use names::{lookup, search};
