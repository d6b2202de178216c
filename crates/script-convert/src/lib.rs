//! # Script Convert
//!
//! Convert Latin letters and digits into the styled alphabets of the
//! Mathematical Alphanumeric Symbols block (bold, italic, fraktur,
//! double-struck, script, sans-serif, monospace) and into regional
//! indicator symbols.
//!
//! ## Example
//!
//! ```
//! use script_convert::{StyleAxis, Transformer, resolve_combination};
//!
//! let combination = resolve_combination([StyleAxis::Italic, StyleAxis::Bold]).unwrap();
//! let bold_italic = Transformer::new(combination);
//! assert_eq!(bold_italic.transform_str("Hi!"), "𝑯𝒊!");
//! ```
//!
//! Letters outside Basic Latin are handled by [`LineTransformer`], which needs
//! a [`Classifier`] to tell letters from other characters.

mod axis;
pub mod config;
mod error;
mod line;
mod registry;
mod resolve;
mod transform;

pub use axis::StyleAxis;
pub use error::{Error, Result};
pub use line::{Classification, Classifier, ConvertOptions, LineTransformer, TransformLines};
pub use registry::{StyleCombination, TransformSpec};
pub use resolve::{resolve, resolve_combination, resolve_names};
pub use transform::Transformer;
