//! The deep merge algorithm.
//!
//! Sources are folded left to right with later sources taking precedence.
//! For every key present in two or more mappings:
//!
//! - absent markers are ignored, and a key nobody defines is skipped;
//! - if any contributor is a primitive (including `null`), the right-most
//!   contributor wins verbatim;
//! - a right-most sequence replaces everything before it;
//! - a right-most mapping is merged recursively with the other mappings for
//!   that key;
//! - a right-most opaque value wins verbatim.
//!
//! Recursion depth follows the nesting depth of the inputs. Values are owned
//! trees, so cycles cannot be expressed; [`Merger`] adds an explicit depth
//! limit for untrusted input.

mod merger;

use std::convert::Infallible;

use indexmap::IndexSet;

use crate::error::render_path;
use crate::{Mapping, MergeError, Value};

pub use merger::Merger;

/// Merge every mapping in `sources`, later sources taking precedence.
///
/// Sources that are not mappings (absent markers, `null`, primitives,
/// sequences and opaque values) are ignored. A single mapping is copied
/// without key resolution; no mappings yields an empty one.
///
/// ```
/// use deep_merge::{deep_merge, Value};
/// use serde_json::json;
///
/// let defaults = Value::from(json!({"a": {"x": 1, "y": 2}, "list": [1, 2, 3]}));
/// let overrides = Value::from(json!({"a": {"y": 3, "z": 4}, "list": [9]}));
/// let merged = deep_merge([&defaults, &overrides]);
/// assert_eq!(
///     Value::from(merged),
///     Value::from(json!({"a": {"x": 1, "y": 3, "z": 4}, "list": [9]})),
/// );
/// ```
#[must_use]
pub fn deep_merge<'a, I>(sources: I) -> Mapping
where
    I: IntoIterator<Item = &'a Value>,
{
    deep_merge_mappings(sources.into_iter().filter_map(Value::as_mapping))
}

/// Merge borrowed mappings directly, skipping the source filter.
#[must_use]
pub fn deep_merge_mappings<'a, I>(mappings: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    let collected: Vec<&Mapping> = mappings.into_iter().collect();
    match merge_mappings(&Unbounded, &collected, &mut Vec::new()) {
        Ok(merged) => merged,
        Err(never) => match never {},
    }
}

/// Merge values of any shape convertible into [`Value`].
///
/// ```
/// use deep_merge::{deep_merge, Value};
/// use serde_json::json;
///
/// let merged = deep_merge!(json!([1, 2]), json!({"a": 1}), "x", json!({"a": 2}));
/// assert_eq!(Value::from(merged), Value::from(json!({"a": 2})));
/// assert!(deep_merge!().is_empty());
/// ```
#[macro_export]
macro_rules! deep_merge {
    () => {
        $crate::deep_merge(::core::iter::empty::<&$crate::Value>())
    };
    ($($source:expr),+ $(,)?) => {
        $crate::deep_merge([$(&$crate::Value::from($source)),+])
    };
}

/// Decides whether two or more mappings at `path` may be merged key by key.
///
/// Keys held by a single mapping are copied and never consulted.
pub(crate) trait DepthGuard {
    type Error;

    fn enter(&self, path: &[&str]) -> Result<(), Self::Error>;
}

/// Guard that never refuses.
pub(crate) struct Unbounded;

impl DepthGuard for Unbounded {
    type Error = Infallible;

    fn enter(&self, _path: &[&str]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Guard refusing key-by-key merges more than `limit` levels below the top
/// level.
pub(crate) struct DepthLimit(pub(crate) usize);

impl DepthGuard for DepthLimit {
    type Error = MergeError;

    fn enter(&self, path: &[&str]) -> Result<(), Self::Error> {
        if path.len() > self.0 {
            return Err(MergeError::TooDeep {
                limit: self.0,
                path: render_path(path),
            });
        }
        Ok(())
    }
}

pub(crate) fn merge_mappings<'a, G: DepthGuard>(
    guard: &G,
    mappings: &[&'a Mapping],
    path: &mut Vec<&'a str>,
) -> Result<Mapping, G::Error> {
    match mappings {
        [] => Ok(Mapping::new()),
        [single] => Ok((*single).clone()),
        _ => resolve_keys(guard, mappings, path),
    }
}

fn resolve_keys<'a, G: DepthGuard>(
    guard: &G,
    mappings: &[&'a Mapping],
    path: &mut Vec<&'a str>,
) -> Result<Mapping, G::Error> {
    let keys: IndexSet<&'a str> = mappings
        .iter()
        .copied()
        .flat_map(|mapping| mapping.keys().map(String::as_str))
        .collect();
    let mut merged = Mapping::with_capacity(keys.len());

    for key in keys {
        let contributors: Vec<&'a Value> = mappings
            .iter()
            .copied()
            .filter_map(|mapping| mapping.get(key))
            .filter(|value| !value.is_undefined())
            .collect();
        let Some(&last) = contributors.last() else {
            continue;
        };

        let resolved = if contributors.iter().any(|value| value.is_primitive()) {
            last.clone()
        } else {
            match last {
                Value::Mapping(_) => {
                    let nested: Vec<&'a Mapping> = contributors
                        .iter()
                        .copied()
                        .filter_map(Value::as_mapping)
                        .collect();
                    path.push(key);
                    if nested.len() > 1 {
                        guard.enter(path)?;
                    }
                    let inner = merge_mappings(guard, &nested, path)?;
                    path.pop();
                    Value::Mapping(inner)
                }
                Value::Sequence(items) => Value::Sequence(items.clone()),
                Value::Opaque(_) | Value::Primitive(_) | Value::Undefined => last.clone(),
            }
        };
        merged.insert(key.to_owned(), resolved);
    }

    Ok(merged)
}
