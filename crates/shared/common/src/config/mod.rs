//! YAML configuration files and layered application settings.
//!
//! Plain YAML documents are parsed with `serde_yaml_ng`; the `config` crate only
//! backs [`load_config`], where keys are settings paths.

mod config_box;

pub use config_box::ConfigBox;

use crate::error::{CommonError, CommonErrorExt};
use crate::files::read_bytes;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables that override settings files.
pub const ENV_PREFIX: &str = "MLP";
/// Settings file looked up (with any supported extension) when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "mlp";

/// Reads a YAML file and deserializes it into `T`.
///
/// The whole file is read into memory, parsed, and mapped onto `T` with serde,
/// so field names and types are checked at load time. Keys are kept exactly as
/// written; dots or brackets inside a key carry no meaning.
///
/// # Errors
/// * [`CommonError::EmptyDocument`] if the document holds no data (empty file,
///   comments only, or a bare `~`/`null`). An empty mapping `{}` is valid.
/// * [`CommonError::FileNotFound`] / [`CommonError::Io`] if the file cannot be read.
/// * [`CommonError::Yaml`] for malformed YAML or content that does not fit `T`.
///
/// # Example
/// ```rust
/// # use mlp_common::read_yaml;
/// #[derive(serde::Deserialize)]
/// struct Training {
///     epochs: u32,
/// }
///
/// # let tmp = tempfile::tempdir().unwrap();
/// # let path = tmp.path().join("params.yaml");
/// # std::fs::write(&path, "epochs: 10\n").unwrap();
/// let params: Training = read_yaml(&path).unwrap();
/// assert_eq!(params.epochs, 10);
/// ```
pub fn read_yaml<T>(path: impl AsRef<Path>) -> Result<T, CommonError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let text = String::from_utf8(bytes).map_err(|e| CommonError::Io {
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        context: Some(format!("YAML file is not valid UTF-8: {}", path.display()).into()),
    })?;

    if is_null_document(&text) {
        return Err(empty_document(path));
    }

    let document: serde_yaml_ng::Value = serde_yaml_ng::from_str(&text)
        .context(format!("Failed to parse YAML: {}", path.display()))?;
    if document.is_null() {
        return Err(empty_document(path));
    }

    let value = serde_yaml_ng::from_value::<T>(document)
        .context(format!("Failed to deserialize YAML: {}", path.display()))?;

    info!("yaml file: {} loaded successfully", path.display());
    Ok(value)
}

/// A document made only of comments, `---` markers and at most one null scalar.
fn is_null_document(text: &str) -> bool {
    let mut content = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(head, _)| head).trim())
        .filter(|line| !line.is_empty() && *line != "---" && *line != "...");

    match (content.next(), content.next()) {
        (None, _) => true,
        (Some(only), None) => matches!(only, "~" | "null" | "Null" | "NULL"),
        _ => false,
    }
}

fn empty_document(path: &Path) -> CommonError {
    CommonError::EmptyDocument {
        message: "yaml file is empty".into(),
        context: Some(path.display().to_string().into()),
    }
}

/// Reads a YAML file into a dynamic [`ConfigBox`].
///
/// # Errors
/// Same as [`read_yaml`].
pub fn read_yaml_box(path: impl AsRef<Path>) -> Result<ConfigBox, CommonError> {
    read_yaml(path)
}

/// Loads layered application settings.
///
/// 1. **Base File**: `path` when given (must exist, format picked from the
///    extension); otherwise an optional `mlp.*` file in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `MLP__`; nested keys are
///    separated by double underscores (`MLP__LOGGING__LEVEL` maps to `logging.level`).
///
/// Missing fields fall back to `T`'s serde defaults.
///
/// # Errors
/// Returns [`CommonError::Config`] if the given file is missing or malformed, or if
/// the merged settings do not fit `T`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T, CommonError>
where
    T: DeserializeOwned,
{
    let file = path.map_or_else(
        || File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        |p| File::from(p).required(true),
    );

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"),
    );

    match path {
        Some(p) => info!("Loading settings from {}", p.display()),
        None => info!("Loading settings from environment and optional '{DEFAULT_SETTINGS_FILE}' file"),
    }

    let settings = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct DataIngestion {
        root_dir: String,
        source_url: String,
        unzip: bool,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pipeline {
        artifacts_root: String,
        data_ingestion: DataIngestion,
    }

    const PIPELINE_YAML: &str = "\
artifacts_root: artifacts
data_ingestion:
  root_dir: artifacts/data_ingestion
  source_url: https://example.com/data.zip
  unzip: true
";

    #[test]
    fn read_yaml_populates_typed_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, PIPELINE_YAML).unwrap();

        let cfg: Pipeline = read_yaml(&path).unwrap();
        assert_eq!(cfg.artifacts_root, "artifacts");
        assert_eq!(cfg.data_ingestion.root_dir, "artifacts/data_ingestion");
        assert!(cfg.data_ingestion.unzip);
    }

    #[test]
    fn read_yaml_twice_is_identical() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, PIPELINE_YAML).unwrap();

        let first: Pipeline = read_yaml(&path).unwrap();
        let second: Pipeline = read_yaml(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_documents_are_rejected() {
        let tmp = tempdir().unwrap();
        for (name, body) in [("empty", ""), ("comment", "# nothing here\n"), ("null", "~\n")] {
            let path = tmp.path().join(format!("{name}.yaml"));
            fs::write(&path, body).unwrap();

            let err = read_yaml_box(&path).unwrap_err();
            assert!(
                matches!(err, CommonError::EmptyDocument { .. }),
                "{name} should be an empty document, got {err}"
            );
        }
    }

    #[test]
    fn null_detection_ignores_comments_and_markers() {
        assert!(is_null_document("---\n# header\nnull # nothing\n"));
        assert!(!is_null_document("key: ~\n"));
        assert!(!is_null_document("~\nkey: 1\n"));
    }

    #[test]
    fn empty_mapping_is_a_valid_empty_box() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.yaml");
        fs::write(&path, "{}\n").unwrap();

        let cfg = read_yaml_box(&path).unwrap();
        assert_eq!(cfg.keys().count(), 0);
        assert_eq!(cfg.as_value(), &serde_json::json!({}));
    }

    #[test]
    fn keys_with_dots_and_brackets_are_kept_verbatim() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.yaml");
        fs::write(&path, "\"model.name\": enet\ncols[0]: x\nother: 1\n").unwrap();

        let cfg = read_yaml_box(&path).unwrap();
        assert_eq!(
            cfg.as_value(),
            &serde_json::json!({ "model.name": "enet", "cols[0]": "x", "other": 1 })
        );
        assert!(!cfg.contains("model"));
        assert!(!cfg.contains("cols"));
    }

    #[test]
    fn keys_keep_document_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.yaml");
        fs::write(&path, "zeta: 1\nalpha: 2\nmid: 3\n").unwrap();

        let keys: Vec<String> = read_yaml_box(&path).unwrap().keys().map(str::to_owned).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.yaml");
        fs::write(&path, "key: [unclosed\n").unwrap();

        let err = read_yaml_box(&path).unwrap_err();
        assert!(matches!(err, CommonError::Yaml { .. }));
    }

    #[test]
    fn wrong_shape_is_a_yaml_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "artifacts_root: artifacts\n").unwrap();

        let err = read_yaml::<Pipeline>(&path).unwrap_err();
        assert!(matches!(err, CommonError::Yaml { .. }));
    }

    #[test]
    fn missing_yaml_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = read_yaml_box(tmp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CommonError::FileNotFound { .. }));
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Settings {
        name: String,
        retries: u32,
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "name = \"trainer\"\nretries = 3\n").unwrap();

        let settings: Settings = load_config(Some(&path)).unwrap();
        assert_eq!(settings.name, "trainer");
        assert_eq!(settings.retries, 3);
    }

    #[test]
    fn load_config_requires_explicit_file_to_exist() {
        let tmp = tempdir().unwrap();
        let err = load_config::<Settings>(Some(&tmp.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, CommonError::Config { .. }));
    }
}
