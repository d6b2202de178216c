//! CLI command implementations.

mod describe;
mod name;
mod style;
mod styles;

pub use describe::{describe, write_descriptions};
pub use name::{lookup_names, write_lookups};
pub use style::{convert_source, style};
pub use styles::{list_styles, write_styles};
