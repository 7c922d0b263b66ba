//! Unit tests for error rendering and construction.

use std::error::Error as _;

use camino::Utf8Path;
use rstest::rstest;

use super::{MergeError, file_error, render_path};

#[rstest]
#[case::root(&[], "<root>")]
#[case::single(&["plugins"], "plugins")]
#[case::nested(&["plugins", "title", "font"], "plugins.title.font")]
fn renders_dotted_paths(#[case] segments: &[&str], #[case] expected: &str) {
    assert_eq!(render_path(segments), expected);
}

#[rstest]
fn too_deep_message_names_limit_and_path() {
    let err = MergeError::TooDeep {
        limit: 2,
        path: render_path(&["a", "b", "c"]),
    };
    assert_eq!(
        err.to_string(),
        "merge exceeded the maximum depth of 2 at 'a.b.c'"
    );
}

#[rstest]
fn file_error_keeps_source() {
    let err = file_error(Utf8Path::new("layers/app.toml"), "boom");
    assert!(
        matches!(err.as_ref(), MergeError::File { path, .. } if path == "layers/app.toml"),
        "expected File variant, got {err:?}"
    );
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("boom"));
}

#[rstest]
fn figment_errors_become_settings_errors() {
    let err = MergeError::from(figment::Error::from("missing key"));
    assert!(matches!(err, MergeError::Settings(_)));
    assert!(err.to_string().contains("missing key"));
}
