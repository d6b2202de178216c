//! Resolve a requested set of axes to a registered combination.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    Error, Result, StyleAxis, StyleCombination, TransformSpec, config::COMPOUND_SEPARATORS,
    registry::composite_key,
};

/// Find the combination registered for exactly `axes`.
///
/// Order and duplicates in the request do not matter. An empty request
/// resolves to [`StyleCombination::Plain`]. Anything not in the registry is
/// [`Error::NoSuchCombination`]; no axis is ever dropped to make a match.
pub fn resolve_combination(axes: impl IntoIterator<Item = StyleAxis>) -> Result<StyleCombination> {
    let canonical: Vec<StyleAxis> = axes.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let key = composite_key(&canonical);
    debug!("resolving style key '{key}'");
    StyleCombination::from_key(&key).ok_or(Error::NoSuchCombination(canonical))
}

/// Resolve `axes` straight to its transform recipe.
pub fn resolve(axes: impl IntoIterator<Item = StyleAxis>) -> Result<&'static TransformSpec> {
    resolve_combination(axes).map(|combination| combination.spec())
}

/// Resolve from axis names.
///
/// Each item may be a single name or a compound such as `"italic+bold"` or
/// `"bold,sans-serif"`. Unknown names fail with [`Error::UnknownAxis`].
pub fn resolve_names<I, S>(names: I) -> Result<StyleCombination>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut axes = Vec::new();
    for name in names {
        for part in name.as_ref().split(COMPOUND_SEPARATORS) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            axes.push(part.parse::<StyleAxis>()?);
        }
    }
    resolve_combination(axes)
}
