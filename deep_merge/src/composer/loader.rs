//! Readers producing layer values from files and the environment.

use camino::Utf8Path;
use figment::{Figment, providers::Env};
use serde_json::Value as JsonValue;
use uncased::UncasedStr;

use crate::error::file_error;
use crate::{Mapping, MergeResult, MergeResultExt, Value};

/// Read a `.json` or `.toml` file into a [`Value`].
///
/// # Errors
///
/// Returns [`crate::MergeError::File`] when the file cannot be read, has an
/// unsupported extension, or fails to parse.
pub fn load_file_layer(path: &Utf8Path) -> MergeResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|err| file_error(path, err))?;
    let parsed: JsonValue = match path.extension().map(str::to_ascii_lowercase).as_deref() {
        Some("json") => serde_json::from_str(&contents).map_err(|err| file_error(path, err))?,
        Some("toml") => toml::from_str(&contents).map_err(|err| file_error(path, err))?,
        other => {
            return Err(file_error(
                path,
                format!(
                    "unsupported layer format '{}'; expected .json or .toml",
                    other.unwrap_or_default()
                ),
            ));
        }
    };
    tracing::debug!(%path, "loaded layer file");
    Ok(Value::from(parsed))
}

/// Collect environment variables starting with `prefix` into a [`Value`].
///
/// The prefix is stripped and names are lower-cased; a double underscore
/// nests, so `APP_PLUGINS__TITLE=on` becomes `{"plugins": {"title": "on"}}`.
/// Use [`align_keys`] (or [`super::LayerComposer::push_environment`]) to map
/// the lower-cased names back onto camelCase keys such as
/// `maintainAspectRatio`.
///
/// # Errors
///
/// Returns [`crate::MergeError::Settings`] when the variables cannot be
/// gathered.
pub fn environment_layer(prefix: &str) -> MergeResult<Value> {
    let gathered: JsonValue = Figment::from(Env::prefixed(prefix).split("__"))
        .extract()
        .into_merge()?;
    Ok(Value::from(gathered))
}

/// Rename keys in `layer` to the spelling used by `reference` when they match
/// ignoring ASCII case, descending into nested mappings.
///
/// Keys with no counterpart in `reference` are kept as they are.
///
/// ```
/// use deep_merge::composer::align_keys;
/// use deep_merge::Value;
/// use serde_json::json;
///
/// let reference = Value::from(json!({"scales": {"r": {"pointLabels": {"color": "#fff"}}}}))
///     .into_mapping()
///     .unwrap_or_default();
/// let layer = Value::from(json!({"scales": {"r": {"pointlabels": {"color": "#000"}}}}));
/// assert_eq!(
///     align_keys(layer, &reference),
///     Value::from(json!({"scales": {"r": {"pointLabels": {"color": "#000"}}}})),
/// );
/// ```
#[must_use]
pub fn align_keys(layer: Value, reference: &Mapping) -> Value {
    let Value::Mapping(entries) = layer else {
        return layer;
    };
    Value::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| {
                let known = reference.get_key_value(key.as_str()).or_else(|| {
                    reference
                        .iter()
                        .find(|(candidate, _)| UncasedStr::new(candidate) == UncasedStr::new(&key))
                });
                match known {
                    Some((spelling, Value::Mapping(nested))) => {
                        (spelling.clone(), align_keys(value, nested))
                    }
                    Some((spelling, _)) => (spelling.clone(), value),
                    None => (key, value),
                }
            })
            .collect(),
    )
}
