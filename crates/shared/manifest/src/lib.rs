//! Package metadata and requirements parsing.
//!
//! ```rust,no_run
//! use mlp_manifest::PackageMetadata;
//!
//! let manifest = PackageMetadata::current().install_requires("requirements.txt")?;
//! for requirement in &manifest.install_requires {
//!     println!("{requirement}");
//! }
//! # Ok::<(), mlp_manifest::ManifestError>(())
//! ```

mod error;
mod metadata;
mod requirements;

pub use error::{ManifestError, ManifestErrorExt};
pub use metadata::{PackageManifest, PackageMetadata};
pub use requirements::{EDITABLE_MARKER, get_requirements};
