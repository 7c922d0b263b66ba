//! Identity-compared handles for values that are never merged field by field.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::Value;

/// Callable stored inside an [`Opaque`] handle.
pub type Callback = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Shared handle to a callable or any other non-plain object.
///
/// Two handles are equal only when they point at the same allocation;
/// cloning a handle keeps its identity.
///
/// ```
/// use deep_merge::{Opaque, Value};
///
/// let formatter = Opaque::callable("tick", |args: &[Value]| {
///     args.first().cloned().unwrap_or_default()
/// });
/// let copy = formatter.clone();
/// assert_eq!(formatter, copy);
/// assert_ne!(formatter, Opaque::new("tick", 0_u8));
/// assert_eq!(copy.call(&[Value::from(3_u32)]), Some(Value::from(3_u32)));
/// ```
#[derive(Clone)]
pub struct Opaque {
    label: Cow<'static, str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wrap an arbitrary value. `label` only appears in diagnostics.
    #[must_use]
    pub fn new<T>(label: impl Into<Cow<'static, str>>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            label: label.into(),
            inner: Arc::new(value),
        }
    }

    /// Wrap a callable so it can be invoked later through [`Self::call`].
    #[must_use]
    pub fn callable<F>(label: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(f);
        Self::new(label, callback)
    }

    /// Diagnostic label supplied at construction.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the wrapped value as `T`, if that is its type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Invoke the wrapped callable. Returns `None` when the handle does not
    /// hold one.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        self.downcast_ref::<Callback>().map(|callback| callback(args))
    }

    /// Returns `true` when both handles share one allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.label).finish()
    }
}
