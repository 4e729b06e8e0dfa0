//! JSON records (metrics, schema snapshots, run summaries).

use crate::config::ConfigBox;
use crate::error::{CommonError, CommonErrorExt};
use crate::files::{read_bytes, write_atomic};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// Saves a mapping as indented JSON, replacing any existing file.
///
/// `data` may be any serializable value that encodes as a JSON object (a
/// struct, a map, `serde_json::json!({..})`, a [`ConfigBox`] holding an object).
///
/// # Errors
/// * [`CommonError::TypeContract`] if `data` does not encode as a JSON object or
///   holds a NaN or infinite float; nothing is written in that case.
/// * [`CommonError::Json`] if `data` cannot be encoded.
/// * [`CommonError::Io`] if the file cannot be written (missing parent
///   directory, permissions).
pub fn save_json<T>(path: impl AsRef<Path>, data: &T) -> Result<(), CommonError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let value = serde_json::to_value(data).context("Failed to encode JSON record")?;
    if !value.is_object() {
        return Err(CommonError::TypeContract {
            message: format!("save_json expects a mapping, got {}", kind_of(&value)).into(),
            context: Some(path.display().to_string().into()),
        });
    }
    // JSON has no NaN/inf; serde_json would write them as null.
    if let Some(at) = serde_yaml_ng::to_value(data).ok().as_ref().and_then(non_finite_path) {
        return Err(CommonError::TypeContract {
            message: format!("save_json cannot store a non-finite float at '{at}'").into(),
            context: Some(path.display().to_string().into()),
        });
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).context("Failed to encode JSON record")?;

    write_atomic(path, &buf)?;

    info!("json file saved at: {}", path.display());
    Ok(())
}

/// Loads a JSON file into `T`.
///
/// # Errors
/// * [`CommonError::FileNotFound`] / [`CommonError::Io`] if the file cannot be read.
/// * [`CommonError::Json`] for malformed JSON or content that does not fit `T`.
pub fn load_json<T>(path: impl AsRef<Path>) -> Result<T, CommonError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let content = serde_json::from_slice(&bytes)
        .context(format!("Failed to parse JSON: {}", path.display()))?;

    info!("json file loaded successfully from: {}", path.display());
    Ok(content)
}

/// Loads a JSON file into a dynamic [`ConfigBox`].
///
/// # Errors
/// Same as [`load_json`].
pub fn load_json_box(path: impl AsRef<Path>) -> Result<ConfigBox, CommonError> {
    load_json(path)
}

/// Dotted path of the first NaN or infinite number in `value`.
fn non_finite_path(value: &serde_yaml_ng::Value) -> Option<String> {
    use serde_yaml_ng::Value as Yaml;

    let nested = |head: String, rest: String| {
        if rest.is_empty() { head } else { format!("{head}.{rest}") }
    };
    match value {
        Yaml::Number(n) if n.is_nan() || n.is_infinite() => Some(String::new()),
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| non_finite_path(item).map(|rest| nested(i.to_string(), rest))),
        Yaml::Mapping(map) => map.iter().find_map(|(key, item)| {
            let head = key.as_str().map_or_else(|| format!("{key:?}"), str::to_owned);
            non_finite_path(item).map(|rest| nested(head, rest))
        }),
        Yaml::Tagged(tagged) => non_finite_path(&tagged.value),
        _ => None,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
