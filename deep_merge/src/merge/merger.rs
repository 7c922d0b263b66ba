//! Configurable front end to the merge algorithm.

use std::sync::Arc;

use crate::{Mapping, MergeResult, MergeSettings, Value};

use super::{DepthLimit, Unbounded, merge_mappings};

/// Runs [`crate::deep_merge()`] with an optional depth limit and input tracing.
///
/// ```
/// use deep_merge::{Merger, MergeError, Value};
/// use serde_json::json;
///
/// let base = Value::from(json!({"a": {"b": {"c": 1}}}));
/// let layer = Value::from(json!({"a": {"b": {"c": 2}}}));
///
/// let merged = Merger::new().merge([&base, &layer])?;
/// assert_eq!(Value::from(merged), layer);
///
/// let err = Merger::new()
///     .with_max_depth(1)
///     .merge([&base, &layer])
///     .expect_err("two levels of nesting exceed the limit");
/// assert!(matches!(err.as_ref(), MergeError::TooDeep { limit: 1, .. }));
/// # Ok::<_, std::sync::Arc<MergeError>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Merger {
    max_depth: Option<usize>,
    trace_inputs: bool,
}

impl Merger {
    /// Create a merger with no depth limit and tracing disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            trace_inputs: false,
        }
    }

    /// Build a merger from loaded [`MergeSettings`].
    #[must_use]
    pub const fn from_settings(settings: &MergeSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            trace_inputs: settings.trace_inputs,
        }
    }

    /// Refuse to merge two or more mappings key by key more than `limit`
    /// levels below the top-level mapping. Subtrees supplied by a single
    /// source are copied at any depth.
    #[must_use]
    pub const fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Emit a `debug` event listing every input of each merge.
    #[must_use]
    pub const fn with_trace_inputs(mut self, enabled: bool) -> Self {
        self.trace_inputs = enabled;
        self
    }

    /// Configured depth limit, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Merge `sources` exactly as [`crate::deep_merge()`] does.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::TooDeep`] when nested mappings exceed the
    /// configured depth limit.
    pub fn merge<'a, I>(&self, sources: I) -> MergeResult<Mapping>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let inputs: Vec<&'a Value> = sources.into_iter().collect();
        if self.trace_inputs {
            tracing::debug!(inputs = ?inputs, "deep merge inputs");
        }
        let mappings: Vec<&'a Mapping> = inputs.iter().copied().filter_map(Value::as_mapping).collect();
        tracing::trace!(
            sources = inputs.len(),
            mappings = mappings.len(),
            max_depth = ?self.max_depth,
            "deep merge"
        );

        match self.max_depth {
            None => match merge_mappings(&Unbounded, &mappings, &mut Vec::new()) {
                Ok(merged) => Ok(merged),
                Err(never) => match never {},
            },
            Some(limit) => {
                merge_mappings(&DepthLimit(limit), &mappings, &mut Vec::new()).map_err(|err| {
                    tracing::debug!(error = %err, "deep merge refused");
                    Arc::new(err)
                })
            }
        }
    }
}
