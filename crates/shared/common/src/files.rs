//! Directory creation, size reporting and the atomic write path shared by the
//! JSON and binary writers.

use crate::error::{CommonError, CommonErrorExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

const BYTES_PER_KB: u64 = 1024;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates every directory in `paths`, including missing parents.
///
/// Directories that already exist are left alone, so the call is idempotent and
/// duplicates in the list are harmless. With `verbose`, each path emits
/// `created directory at: <path>`.
///
/// # Errors
/// Returns [`CommonError::Io`] when a directory cannot be created (permissions,
/// or a regular file in the way). Directories created before the failing one
/// are kept.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<(), CommonError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)
            .context(format!("Failed to create directory: {}", path.display()))?;
        if verbose {
            info!("created directory at: {}", path.display());
        }
    }
    Ok(())
}

/// Size of the file at `path` in kilobytes, rounded to the nearest whole KB
/// (exact halves round to the even neighbour).
///
/// # Errors
/// Returns [`CommonError::FileNotFound`] if nothing exists at `path`.
pub fn file_size_kb(path: impl AsRef<Path>) -> Result<u64, CommonError> {
    let path = path.as_ref();
    let len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(not_found(path));
        },
        Err(err) => {
            return Err(CommonError::Io {
                source: err,
                context: Some(format!("Failed to get metadata: {}", path.display()).into()),
            });
        },
    };

    Ok(round_half_even(len, BYTES_PER_KB))
}

/// Human-readable size of the file at `path`, e.g. `~ 24 KB`.
///
/// # Errors
/// Returns [`CommonError::FileNotFound`] if nothing exists at `path`.
pub fn get_size(path: impl AsRef<Path>) -> Result<String, CommonError> {
    file_size_kb(path).map(|kb| format!("~ {kb} KB"))
}

fn round_half_even(value: u64, unit: u64) -> u64 {
    let (quotient, remainder) = (value / unit, value % unit);
    match (remainder * 2).cmp(&unit) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    }
}

/// Reads a whole file, reporting a missing file as [`CommonError::FileNotFound`].
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, CommonError> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(not_found(path)),
        Err(err) => Err(CommonError::Io {
            source: err,
            context: Some(format!("Read failed: {}", path.display()).into()),
        }),
    }
}

/// Writes `data` to `path` through a temp file, `fsync` and `rename`.
///
/// The target is either left untouched or fully replaced. The parent directory
/// must already exist.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CommonError> {
    let temp = unique_tmp_path(path);

    if let Err(err) = write_temp(&temp, data) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }

    if let Err(err) = fs::rename(&temp, path) {
        let swapped = if err.kind() == std::io::ErrorKind::AlreadyExists {
            fs::remove_file(path)
                .and_then(|()| fs::rename(&temp, path))
                .context(format!("Failed to replace existing file: {}", path.display()))
        } else {
            Err(CommonError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.display(), path.display()).into(),
                ),
            })
        };
        if swapped.is_err() {
            let _ = fs::remove_file(&temp);
        }
        swapped?;
    }

    #[cfg(unix)]
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        sync_dir(parent);
    }

    debug!(path = %path.display(), "File saved atomically");
    Ok(())
}

fn write_temp(temp: &Path, data: &[u8]) -> Result<(), CommonError> {
    let mut file = fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(temp)
        .context(format!("Temp creation failed: {}", temp.display()))?;
    file.write_all(data).context("Write failed")?;
    file.sync_all().context("Hardware sync failed")
}

#[cfg(unix)]
fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn unique_tmp_path(target: &Path) -> PathBuf {
    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("artifact");
    target.with_file_name(format!("{file_name}.mlptmp.{}.{counter}", std::process::id()))
}

fn not_found(path: &Path) -> CommonError {
    CommonError::FileNotFound { message: path.display().to_string().into(), context: None }
}
