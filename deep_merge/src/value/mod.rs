//! Mergeable values.
//!
//! [`Value`] is the tagged union the merge algorithm dispatches on: plain
//! mappings, sequences, primitives and opaque handles. A mapping entry may
//! also hold [`Value::Undefined`], the absent marker, which means "not set"
//! and is distinct from [`Primitive::Null`].

mod convert;
mod opaque;

use indexmap::IndexMap;
use serde_json::Number;

pub use convert::{from_mapping, mapping_to_json};
pub use opaque::{Callback, Opaque};

/// Ordered collection of uniquely keyed values.
pub type Mapping = IndexMap<String, Value>;

/// Scalar leaf values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Explicit `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer or finite floating point number.
    Number(Number),
    /// UTF-8 string.
    String(String),
}

/// A value that can take part in a deep merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent marker. Skipped when resolving a key.
    #[default]
    Undefined,
    /// Replaces any other contributor for the same key outright.
    Primitive(Primitive),
    /// Replaced wholesale, never concatenated.
    Sequence(Vec<Self>),
    /// Merged key by key with other mappings.
    Mapping(Mapping),
    /// Atomic handle compared by identity.
    Opaque(Opaque),
}

impl Value {
    /// Shorthand for `Value::Primitive(Primitive::Null)`.
    #[must_use]
    pub const fn null() -> Self {
        Self::Primitive(Primitive::Null)
    }

    /// Returns `true` for the absent marker.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `null`, booleans, numbers and strings.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Borrow the inner mapping, if this is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Mutably borrow the inner mapping, if this is one.
    #[must_use]
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow the inner sequence, if this is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the inner opaque handle, if this is one.
    #[must_use]
    pub const fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(handle) => Some(handle),
            _ => None,
        }
    }

    /// Consume the value, returning the mapping it holds.
    #[must_use]
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Follow `path` through nested mappings.
    ///
    /// ```
    /// use deep_merge::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::from(json!({"plugins": {"title": {"display": true}}}));
    /// assert_eq!(
    ///     value.lookup(&["plugins", "title", "display"]),
    ///     Some(&Value::from(true)),
    /// );
    /// assert!(value.lookup(&["plugins", "legend"]).is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |current, key| current.as_mapping()?.get(*key))
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Primitive(Primitive::Bool(flag))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Primitive(Primitive::Number(number.into()))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Primitive(Primitive::Number(number.into()))
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Primitive(Primitive::Number(number.into()))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no numeric representation and become `null`.
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or_else(Self::null, |n| Self::Primitive(Primitive::Number(n)))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Primitive(Primitive::String(text.to_owned()))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Primitive(Primitive::String(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Opaque> for Value {
    fn from(handle: Opaque) -> Self {
        Self::Opaque(handle)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes the absent marker rather than `null`.
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
