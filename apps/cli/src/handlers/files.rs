use anyhow::Result;
use mlproject::common::{create_directories, get_size};
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn mkdirs(dirs: &[PathBuf], quiet: bool) -> Result<()> {
    create_directories(dirs, !quiet)?;
    Ok(())
}

pub(crate) fn size(file: &Path) -> Result<()> {
    let size = get_size(file)?;
    writeln!(std::io::stdout().lock(), "{size}")?;
    Ok(())
}
