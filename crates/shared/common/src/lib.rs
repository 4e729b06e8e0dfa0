//! # Common
//!
//! File utilities used by the training and inference code:
//!
//! * [`read_yaml`] / [`read_yaml_box`]: configuration files, typed or dynamic.
//! * [`create_directories`]: idempotent `mkdir -p` over a list of paths.
//! * [`save_json`] / [`load_json`]: indented JSON records (metrics, summaries).
//! * [`save_bin`] / [`load_bin`]: opaque binary artifacts (models, encoders).
//! * [`get_size`]: human-readable file size.
//! * [`load_config`]: layered application settings (file + `MLP__` environment).
//!
//! Every operation is synchronous and reports what it did through `tracing`;
//! install a subscriber (see `mlp-logger`) to see the records. Writers replace
//! their target atomically, so a failed call never leaves a half-written file.
//!
//! ## Example
//!
//! ```rust
//! use mlp_common::{create_directories, load_json_box, save_json};
//!
//! # let tmp = tempfile::tempdir().unwrap();
//! let root = tmp.path().join("artifacts/model_evaluation");
//! create_directories([&root], true)?;
//!
//! save_json(root.join("metrics.json"), &serde_json::json!({ "accuracy": 0.91 }))?;
//! let metrics = load_json_box(root.join("metrics.json"))?;
//! assert_eq!(metrics.get_as::<f64>("accuracy")?, 0.91);
//! # Ok::<(), mlp_common::CommonError>(())
//! ```

pub mod binary;
pub mod config;
mod error;
pub mod files;
pub mod json;

pub use crate::binary::{Compression, load_bin, save_bin, save_bin_with};
pub use crate::config::{ConfigBox, load_config, read_yaml, read_yaml_box};
pub use crate::error::{CommonError, CommonErrorExt};
pub use crate::files::{create_directories, file_size_kb, get_size};
pub use crate::json::{load_json, load_json_box, save_json};
