use anyhow::{Context, Result};
use mlproject::common::{CommonError, read_yaml_box};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

pub(crate) fn show_config(file: &Path, key: Option<&str>) -> Result<()> {
    let config = read_yaml_box(file)?;

    let rendered = match key {
        Some(key) => match config.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(value) => serde_json::to_string_pretty(value)?,
            None => {
                return Err(CommonError::MissingKey { message: key.to_owned().into(), context: None })
                    .with_context(|| format!("in {}", file.display()));
            },
        },
        None => serde_json::to_string_pretty(config.as_value())?,
    };

    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}
