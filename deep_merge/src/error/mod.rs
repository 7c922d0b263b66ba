//! Error types produced outside the infallible merge core.
//!
//! [`crate::deep_merge()`] never fails. Errors only arise from the depth-guarded
//! [`crate::Merger`], from JSON conversion of opaque values, and from loading
//! settings or layer files.

mod constructors;
mod types;

pub use types::MergeError;

pub(crate) use constructors::{file_error, render_path};

#[cfg(test)]
mod tests;
