//! Deep merging of layered configuration mappings.
//!
//! [`deep_merge()`] folds any number of [`Value`]s into a single [`Mapping`],
//! later sources taking precedence. Nested mappings merge key by key,
//! sequences and opaque values are replaced wholesale, and a primitive at a
//! key makes the right-most source win outright. The function is total and
//! never mutates its inputs.
//!
//! Around that core the crate offers a depth-guarded [`Merger`] configured by
//! [`MergeSettings`], a provenance-aware [`LayerComposer`], and the
//! [`chart`] helpers that build charting engine options from defaults,
//! styling and caller overrides.
//!
//! # Example
//!
//! ```rust
//! use deep_merge::{deep_merge, Value};
//! use serde_json::json;
//!
//! let defaults = Value::from(json!({"responsive": true, "plugins": {"title": {"display": false}}}));
//! let options = Value::from(json!({"plugins": {"title": {"display": true, "text": "Sales"}}}));
//!
//! let merged = Value::from(deep_merge([&defaults, &options]));
//! assert_eq!(
//!     merged,
//!     Value::from(json!({
//!         "responsive": true,
//!         "plugins": {"title": {"display": true, "text": "Sales"}},
//!     })),
//! );
//! ```

use std::sync::Arc;

pub mod chart;
pub mod composer;
mod error;
mod merge;
mod result_ext;
mod settings;
mod value;

pub use composer::{LayerComposer, Layer, Provenance, environment_layer, load_file_layer};
pub use error::MergeError;
pub use merge::{Merger, deep_merge, deep_merge_mappings};
pub use result_ext::MergeResultExt;
pub use settings::{ENV_PREFIX, MergeSettings, SETTINGS_FILE};
pub use value::{Callback, Mapping, Opaque, Primitive, Value, from_mapping, mapping_to_json};

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, Arc<MergeError>>;
