//! Layers fed to a [`super::LayerComposer`], each remembering where its
//! value was read from.

use std::borrow::Cow;

use camino::Utf8PathBuf;

use crate::Value;

/// Source of a layer, in the order layers are usually pushed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Provenance {
    /// Options computed by the library, such as
    /// [`crate::chart::ChartPresentation::default_options`].
    Defaults,
    /// A `.json` or `.toml` layer file.
    File,
    /// Prefixed environment variables gathered by [`super::environment_layer`].
    Environment,
    /// Options handed in by the caller at the call site.
    Overrides,
}

/// A value awaiting composition together with its [`Provenance`].
///
/// The value may be borrowed so callers can layer options they keep using
/// afterwards; [`Layer::into_owned`] detaches it.
#[derive(Clone, Debug)]
pub struct Layer<'a> {
    provenance: Provenance,
    value: Cow<'a, Value>,
    path: Option<Utf8PathBuf>,
}

impl<'a> Layer<'a> {
    /// Wrap computed default options.
    #[must_use]
    pub const fn defaults(value: Cow<'a, Value>) -> Self {
        Self {
            provenance: Provenance::Defaults,
            value,
            path: None,
        }
    }

    /// Wrap the contents of a layer file, remembering `path` for diagnostics.
    #[must_use]
    pub const fn file(value: Cow<'a, Value>, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: Provenance::File,
            value,
            path,
        }
    }

    /// Wrap values gathered from the environment.
    #[must_use]
    pub const fn environment(value: Cow<'a, Value>) -> Self {
        Self {
            provenance: Provenance::Environment,
            value,
            path: None,
        }
    }

    /// Wrap caller supplied options.
    #[must_use]
    pub const fn overrides(value: Cow<'a, Value>) -> Self {
        Self {
            provenance: Provenance::Overrides,
            value,
            path: None,
        }
    }

    /// Which source produced this layer.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// File the value was read from. Only file layers carry one.
    #[must_use]
    pub const fn path(&self) -> Option<&Utf8PathBuf> {
        self.path.as_ref()
    }

    /// The value as it will enter the merge.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Drop the provenance and keep the value, cloning it if borrowed.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value.into_owned()
    }

    /// Clone a borrowed value so the layer can outlive its source.
    #[must_use]
    pub fn into_owned(self) -> Layer<'static> {
        Layer {
            provenance: self.provenance,
            value: Cow::Owned(self.value.into_owned()),
            path: self.path,
        }
    }
}
