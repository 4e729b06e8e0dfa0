use crate::error::{CommonError, CommonErrorExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A read-only, dynamically typed view over a parsed YAML or JSON document.
///
/// Prefer deserializing into a concrete struct. `ConfigBox` is for tooling and
/// quick scripts that only know key paths at run time. Nested keys are reached
/// with dotted paths; numeric segments index into sequences.
///
/// ```rust
/// # use mlp_common::ConfigBox;
/// let cfg = ConfigBox::from(serde_json::json!({
///     "model": { "params": { "alpha": 0.2 }, "layers": [64, 32] }
/// }));
///
/// assert_eq!(cfg.get_as::<f64>("model.params.alpha").unwrap(), 0.2);
/// assert_eq!(cfg.get_as::<u32>("model.layers.1").unwrap(), 32);
/// assert!(!cfg.contains("model.dropout"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBox(Value);

impl ConfigBox {
    /// Looks up a dotted key path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').filter(|s| !s.is_empty()).try_fold(&self.0, |node, key| match node {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Looks up a dotted key path and deserializes the value found there.
    ///
    /// # Errors
    /// Returns [`CommonError::MissingKey`] if the path does not exist, and
    /// [`CommonError::Json`] if the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, CommonError> {
        let value = self.get(path).ok_or_else(|| CommonError::MissingKey {
            message: path.to_owned().into(),
            context: None,
        })?;
        T::deserialize(value).context(format!("Key '{path}' has an unexpected type"))
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Top-level keys, in document order. Empty when the root is not a mapping.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.as_object().into_iter().flat_map(|map| map.keys().map(String::as_str))
    }

    /// Deserializes the whole document into a typed structure.
    ///
    /// # Errors
    /// Returns [`CommonError::Json`] if the document does not fit `T`.
    pub fn to_struct<T: DeserializeOwned>(&self) -> Result<T, CommonError> {
        T::deserialize(&self.0).context("Document has an unexpected shape")
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ConfigBox {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConfigBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigBox {
        ConfigBox::from(json!({
            "artifacts_root": "artifacts",
            "model_trainer": { "alpha": 0.2, "l1_ratio": 0.1, "target": "quality" },
            "columns": ["fixed acidity", "pH"]
        }))
    }

    #[test]
    fn dotted_paths_reach_nested_values() {
        let cfg = sample();
        assert_eq!(cfg.get("artifacts_root"), Some(&json!("artifacts")));
        assert_eq!(cfg.get_as::<f64>("model_trainer.alpha").unwrap(), 0.2);
        assert_eq!(cfg.get_as::<String>("columns.1").unwrap(), "pH");
    }

    #[test]
    fn missing_keys_are_reported() {
        let err = sample().get_as::<f64>("model_trainer.beta").unwrap_err();
        assert!(matches!(err, CommonError::MissingKey { .. }));
        assert!(sample().get("columns.9").is_none());
        assert!(sample().get("artifacts_root.deeper").is_none());
    }

    #[test]
    fn wrong_types_are_json_errors() {
        let err = sample().get_as::<u32>("model_trainer.target").unwrap_err();
        assert!(matches!(err, CommonError::Json { .. }));
    }

    #[test]
    fn keys_follow_document_order() {
        let keys: Vec<_> = sample().keys().map(str::to_owned).collect();
        assert_eq!(keys, ["artifacts_root", "model_trainer", "columns"]);
        assert_eq!(ConfigBox::from(json!([1, 2])).keys().count(), 0);
    }

    #[test]
    fn deserialize_into_typed_struct() {
        #[derive(Deserialize)]
        struct Trainer {
            alpha: f64,
            target: String,
        }

        let trainer: Trainer = ConfigBox::from(sample().get("model_trainer").cloned().unwrap())
            .to_struct()
            .unwrap();
        assert!((trainer.alpha - 0.2).abs() < f64::EPSILON);
        assert_eq!(trainer.target, "quality");
    }
}
