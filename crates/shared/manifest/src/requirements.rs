use crate::error::ManifestError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Marker line that installs the project itself in editable mode.
pub const EDITABLE_MARKER: &str = "-e .";

/// Reads a requirements file into one entry per line.
///
/// Line terminators are stripped and every other character is kept, blank lines
/// included. The first line exactly equal to [`EDITABLE_MARKER`] is dropped;
/// later copies and lines that merely contain it (`-e ./sub`, ` -e .`) stay.
///
/// # Errors
/// * [`ManifestError::FileNotFound`] if nothing exists at `path`.
/// * [`ManifestError::Io`] if the file cannot be read or is not UTF-8.
pub fn get_requirements(path: impl AsRef<Path>) -> Result<Vec<String>, ManifestError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ManifestError::FileNotFound {
            message: path.display().to_string().into(),
            context: None,
        },
        _ => ManifestError::Io {
            source: err,
            context: Some(format!("Failed to read requirements: {}", path.display()).into()),
        },
    })?;

    let requirements = parse_requirements(&text);
    debug!(path = %path.display(), count = requirements.len(), "Requirements parsed");
    Ok(requirements)
}

pub(crate) fn parse_requirements(text: &str) -> Vec<String> {
    let mut requirements: Vec<String> = text.lines().map(str::to_owned).collect();
    if let Some(pos) = requirements.iter().position(|line| line == EDITABLE_MARKER) {
        requirements.remove(pos);
    }
    requirements
}
