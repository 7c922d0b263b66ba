//! Primary error enum for merge and layer loading flows.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur around a deep merge.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// Nested mappings were merged deeper than the configured limit.
    #[error("merge exceeded the maximum depth of {limit} at '{path}'")]
    TooDeep {
        /// Depth limit the merger was configured with.
        limit: usize,
        /// Dotted key path of the mapping that crossed the limit.
        path: String,
    },

    /// An opaque value was asked for a JSON representation.
    #[error("opaque value '{label}' at '{path}' cannot be represented as JSON")]
    Opaque {
        /// Label the opaque handle was created with.
        label: String,
        /// Dotted key path of the offending value.
        path: String,
    },

    /// A merged mapping could not be decoded into the requested type.
    #[error("failed to decode merged mapping: {0}")]
    Decode(#[from] serde_json::Error),

    /// Merge settings could not be gathered from their providers.
    #[error("failed to gather merge settings: {0}")]
    Settings(#[from] Box<FigmentError>),

    /// A layer file could not be read or parsed.
    #[error("layer file error in '{path}': {source}")]
    File {
        /// Path of the file that failed to load.
        path: Utf8PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<FigmentError> for MergeError {
    fn from(e: FigmentError) -> Self {
        Self::Settings(Box::new(e))
    }
}
