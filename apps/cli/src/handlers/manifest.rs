use anyhow::Result;
use mlproject::manifest::{PackageMetadata, get_requirements};
use std::io::Write;
use std::path::Path;

pub(crate) fn requirements(file: &Path) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for requirement in get_requirements(file)? {
        writeln!(out, "{requirement}")?;
    }
    Ok(())
}

pub(crate) fn info(requirements: Option<&Path>) -> Result<()> {
    let metadata = PackageMetadata::current();
    let rendered = match requirements {
        Some(path) => serde_json::to_string_pretty(&metadata.install_requires(path)?)?,
        None => serde_json::to_string_pretty(&metadata)?,
    };
    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}
