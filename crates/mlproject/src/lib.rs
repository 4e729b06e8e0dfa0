//! Facade crate for the `mlProject` scaffold.
//! Re-exports the logger, the file utilities and the package manifest so pipeline
//! stages depend on one crate.
//!
//! ## Usage
//! ```rust,no_run
//! use mlproject::common::{create_directories, read_yaml_box, save_json};
//! use mlproject::logger::Logger;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let _logger = Logger::builder().name("training").console(true).default_path().init()?;
//!
//! let config = read_yaml_box("config/config.yaml")?;
//! let root: String = config.get_as("artifacts_root")?;
//! create_directories([&root], true)?;
//! save_json(format!("{root}/metrics.json"), &config)?;
//! # Ok(())
//! # }
//! ```

pub use mlp_common as common;
pub use mlp_logger as logger;
pub use mlp_manifest as manifest;

pub use mlp_common::{ConfigBox, CommonError};
pub use mlp_logger::Logger;
pub use mlp_manifest::PackageMetadata;
