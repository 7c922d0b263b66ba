//! Extension for mapping errors into `MergeResult` concisely.
//!
//! Replaces repeated `.map_err(|e| Arc::new(MergeError::from(e)))` calls when
//! converting external error types into the crate's `MergeResult<T>` alias
//! (`Result<T, Arc<MergeError>>`).
//!
//! # Examples
//!
//! ```
//! use deep_merge::{MergeResult, MergeResultExt};
//!
//! fn decode() -> MergeResult<u16> {
//!     // serde_json::Error implements Into<MergeError>
//!     serde_json::from_str("8080").into_merge()
//! }
//! # assert_eq!(decode().ok(), Some(8080));
//! ```

use std::sync::Arc;

use crate::{MergeError, MergeResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MergeError>`
/// into a `MergeResult<T>`.
pub trait MergeResultExt<T, E> {
    /// Convert `Result<T, E>` into `MergeResult<T>` using `Into<MergeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MergeError>`.
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> MergeResultExt<T, E> for Result<T, E>
where
    E: Into<MergeError>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
