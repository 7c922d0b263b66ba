//! Conversions between [`Value`] and `serde_json`.
//!
//! Absent markers have no JSON form: they are dropped from mappings and
//! become `null` inside sequences. Opaque values cannot be converted at all.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::error::render_path;
use crate::{MergeError, MergeResult, MergeResultExt};

use super::{Mapping, Primitive, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::null(),
            JsonValue::Bool(flag) => Self::Primitive(Primitive::Bool(flag)),
            JsonValue::Number(number) => Self::Primitive(Primitive::Number(number)),
            JsonValue::String(text) => Self::Primitive(Primitive::String(text)),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = MergeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        to_json(value, &mut Vec::new())
    }
}

/// Render a merged mapping as a JSON object.
///
/// # Errors
///
/// Returns [`MergeError::Opaque`] when the mapping contains an opaque value.
pub fn mapping_to_json(mapping: &Mapping) -> MergeResult<JsonValue> {
    mapping_json(mapping, &mut Vec::new()).map_err(Into::into)
}

/// Deserialise a merged mapping into `T`.
///
/// ```
/// use deep_merge::{deep_merge, from_mapping, Value};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let merged = deep_merge([
///     &Value::from(json!({"host": "localhost", "port": 80})),
///     &Value::from(json!({"port": 8080})),
/// ]);
/// let server: Server = from_mapping(&merged)?;
/// assert_eq!((server.host.as_str(), server.port), ("localhost", 8080));
/// # Ok::<_, std::sync::Arc<deep_merge::MergeError>>(())
/// ```
///
/// # Errors
///
/// Returns [`MergeError::Opaque`] when the mapping holds an opaque value and
/// [`MergeError::Decode`] when the JSON form does not fit `T`.
pub fn from_mapping<T: DeserializeOwned>(mapping: &Mapping) -> MergeResult<T> {
    let json = mapping_to_json(mapping)?;
    serde_json::from_value(json).into_merge()
}

fn to_json(value: &Value, path: &mut Vec<String>) -> Result<JsonValue, MergeError> {
    match value {
        Value::Undefined | Value::Primitive(Primitive::Null) => Ok(JsonValue::Null),
        Value::Primitive(Primitive::Bool(flag)) => Ok(JsonValue::Bool(*flag)),
        Value::Primitive(Primitive::Number(number)) => Ok(JsonValue::Number(number.clone())),
        Value::Primitive(Primitive::String(text)) => Ok(JsonValue::String(text.clone())),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                path.push(index.to_string());
                let converted = to_json(item, path);
                path.pop();
                converted
            })
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Mapping(mapping) => mapping_json(mapping, path),
        Value::Opaque(handle) => Err(MergeError::Opaque {
            label: handle.label().to_owned(),
            path: render_path(path.as_slice()),
        }),
    }
}

fn mapping_json(mapping: &Mapping, path: &mut Vec<String>) -> Result<JsonValue, MergeError> {
    let mut object = Map::with_capacity(mapping.len());
    for (key, value) in mapping.iter().filter(|(_, value)| !value.is_undefined()) {
        path.push(key.clone());
        let converted = to_json(value, path);
        path.pop();
        object.insert(key.clone(), converted?);
    }
    Ok(JsonValue::Object(object))
}
