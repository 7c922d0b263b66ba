//! Layered composition on top of [`crate::deep_merge()`].
//!
//! A [`LayerComposer`] collects values in precedence order, each tagged with
//! its [`Provenance`], and folds them into one mapping. Defaults go first and
//! caller overrides last, so later layers win under the usual merge rules.
//!
//! # Example
//!
//! ```rust
//! use deep_merge::{LayerComposer, Provenance, Value};
//! use serde_json::json;
//!
//! let mut composer = LayerComposer::new();
//! composer.push_defaults(Value::from(json!({"responsive": true, "plugins": {"legend": {"position": "top"}}})));
//! composer.push_overrides(Value::from(json!({"plugins": {"legend": {"position": "bottom"}}})));
//!
//! let provenances: Vec<Provenance> = composer.layers().iter().map(|layer| layer.provenance()).collect();
//! assert_eq!(provenances, [Provenance::Defaults, Provenance::Overrides]);
//!
//! let merged = Value::from(composer.compose());
//! assert_eq!(merged.lookup(&["plugins", "legend", "position"]), Some(&Value::from("bottom")));
//! assert_eq!(merged.lookup(&["responsive"]), Some(&Value::from(true)));
//! ```

mod layer;
mod loader;

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;

use crate::{Mapping, MergeResult, Merger, Value, deep_merge, from_mapping};

pub use layer::{Layer, Provenance};
pub use loader::{align_keys, environment_layer, load_file_layer};

/// Builder that accumulates [`Layer`] instances.
#[derive(Clone, Debug, Default)]
pub struct LayerComposer {
    layers: Vec<Layer<'static>>,
}

impl LayerComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: Value) {
        self.push_layer(Layer::defaults(Cow::Owned(value)));
    }

    /// Push a file layer.
    pub fn push_file(&mut self, value: Value, path: Option<Utf8PathBuf>) {
        self.push_layer(Layer::file(Cow::Owned(value), path));
    }

    /// Load `path` with [`load_file_layer`] and push it as a file layer.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`load_file_layer`].
    pub fn push_file_from(&mut self, path: &Utf8Path) -> MergeResult<()> {
        let value = load_file_layer(path)?;
        self.push_file(value, Some(path.to_owned()));
        Ok(())
    }

    /// Push an environment layer.
    ///
    /// Environment names arrive lower-cased, so keys are first aligned with
    /// [`align_keys`] against the layers pushed so far.
    pub fn push_environment(&mut self, value: Value) {
        let aligned = align_keys(value, &self.compose());
        self.push_layer(Layer::environment(Cow::Owned(aligned)));
    }

    /// Push a caller overrides layer.
    pub fn push_overrides(&mut self, value: Value) {
        self.push_layer(Layer::overrides(Cow::Owned(value)));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: Layer<'static>) {
        tracing::debug!(
            provenance = ?layer.provenance(),
            path = ?layer.path(),
            "pushed merge layer"
        );
        self.layers.push(layer);
    }

    /// Borrow the accumulated layers in precedence order.
    #[must_use]
    pub fn layers(&self) -> &[Layer<'static>] {
        &self.layers
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn into_layers(self) -> Vec<Layer<'static>> {
        self.layers
    }

    /// Fold every layer with [`deep_merge()`].
    #[must_use]
    pub fn compose(&self) -> Mapping {
        deep_merge(self.layers.iter().map(Layer::value))
    }

    /// Fold every layer with `merger`.
    ///
    /// # Errors
    ///
    /// Propagates the merger's depth limit failure.
    pub fn compose_with(&self, merger: &Merger) -> MergeResult<Mapping> {
        merger.merge(self.layers.iter().map(Layer::value))
    }

    /// Compose the layers and deserialise the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error when the composed mapping holds an opaque value or
    /// does not decode as `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> MergeResult<T> {
        from_mapping(&self.compose())
    }
}

#[cfg(test)]
mod tests;
