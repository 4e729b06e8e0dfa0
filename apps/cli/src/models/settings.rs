use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) logging: LoggingSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct LoggingSettings {
    pub(crate) dir: PathBuf,
    pub(crate) level: String,
    pub(crate) console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { dir: PathBuf::from("logs"), level: "info".to_owned(), console: true }
    }
}
