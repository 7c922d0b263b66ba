//! Settings controlling [`crate::Merger`].
//!
//! Settings are layered with Figment: built-in defaults, then
//! [`SETTINGS_FILE`] in the working directory when it exists, then
//! environment variables carrying [`ENV_PREFIX`] (for example
//! `DEEP_MERGE_MAX_DEPTH=16`).

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::file_error;
use crate::{MergeResult, MergeResultExt};

/// File consulted by [`MergeSettings::load`].
pub const SETTINGS_FILE: &str = "deep_merge.toml";

/// Prefix for environment variables overriding settings.
pub const ENV_PREFIX: &str = "DEEP_MERGE_";

/// Tunables for a [`crate::Merger`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Deepest nested mapping level a merge may descend into. `None` leaves
    /// recursion unbounded.
    pub max_depth: Option<usize>,
    /// Emit a `debug` event listing the inputs of every merge.
    pub trace_inputs: bool,
}

impl MergeSettings {
    /// Load settings from defaults, [`SETTINGS_FILE`] and the environment.
    ///
    /// A missing settings file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::Settings`] when a provider yields values
    /// that do not fit the settings.
    pub fn load() -> MergeResult<Self> {
        let settings: Self = Self::figment(Utf8Path::new(SETTINGS_FILE))
            .extract()
            .into_merge()?;
        tracing::debug!(file = SETTINGS_FILE, ?settings, "loaded merge settings");
        Ok(settings)
    }

    /// Load settings from defaults, the file at `path` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::File`] when `path` is not a readable file
    /// and [`crate::MergeError::Settings`] when the gathered values do not fit
    /// the settings.
    pub fn load_from(path: &Utf8Path) -> MergeResult<Self> {
        if !path.is_file() {
            return Err(file_error(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "settings file not found"),
            ));
        }
        let settings: Self = Self::figment(path).extract().into_merge()?;
        tracing::debug!(%path, ?settings, "loaded merge settings");
        Ok(settings)
    }

    fn figment(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
