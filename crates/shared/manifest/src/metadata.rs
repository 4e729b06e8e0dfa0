use crate::error::ManifestError;
use crate::requirements::get_requirements;
use serde::Serialize;
use std::path::Path;

/// Static identity of the project package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub author_email: &'static str,
    pub repo_name: &'static str,
    pub src_repo: &'static str,
}

impl PackageMetadata {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            name: "IDS_CICIDS17",
            version: env!("CARGO_PKG_VERSION"),
            author: "Vishal Ganapathy",
            author_email: "vishalganpathy@gmail.com",
            repo_name: "end-end-MLP-with-MLFlow",
            src_repo: "mlProject",
        }
    }

    /// Pairs this metadata with the install requirements listed in `path`.
    ///
    /// # Errors
    /// Same as [`get_requirements`].
    pub fn install_requires(self, path: impl AsRef<Path>) -> Result<PackageManifest, ManifestError> {
        let install_requires = get_requirements(path)?;
        Ok(PackageManifest { metadata: self, install_requires })
    }
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self::current()
    }
}

/// Metadata plus the resolved install requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    #[serde(flatten)]
    pub metadata: PackageMetadata,
    pub install_requires: Vec<String>,
}
