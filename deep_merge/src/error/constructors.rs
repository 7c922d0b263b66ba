//! Constructors shared by the modules that raise `MergeError`.

use std::sync::Arc;

use camino::Utf8Path;

use super::MergeError;

/// Wrap a read or parse failure for `path` as [`MergeError::File`].
pub(crate) fn file_error<E>(path: &Utf8Path, source: E) -> Arc<MergeError>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Arc::new(MergeError::File {
        path: path.to_owned(),
        source: source.into(),
    })
}

/// Join key segments into the dotted form used in error messages.
///
/// The empty path renders as `<root>`.
pub(crate) fn render_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return String::from("<root>");
    }
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}
