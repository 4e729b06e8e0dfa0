//! Opaque binary artifacts (fitted models, encoders, feature matrices).
//!
//! An artifact file is a six byte header followed by the `postcard` encoding of
//! the value:
//!
//! | bytes | content                                   |
//! |-------|-------------------------------------------|
//! | 0..4  | magic `MLPB`                              |
//! | 4     | container version (`1`)                   |
//! | 5     | compression (`0` none, `1` LZ4 block)     |
//! | 6..   | payload                                   |
//!
//! The reader must ask for the same Rust type the writer stored. `postcard` is
//! not self-describing, so dynamic values such as `serde_json::Value` or
//! [`ConfigBox`](crate::ConfigBox) cannot be stored this way; use JSON for those.

use crate::error::{CommonError, CommonErrorExt};
use crate::files::{read_bytes, write_atomic};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::info;

const MAGIC: &[u8; 4] = b"MLPB";
const CONTAINER_VERSION: u8 = 1;
const HEADER_LEN: usize = 6;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Compression {
    #[default]
    None,
    Lz4,
}

impl Compression {
    const fn flag(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Lz4 => 1,
        }
    }

    const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::None),
            1 => Some(Self::Lz4),
            _ => None,
        }
    }

    fn compress(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::None => data.to_vec(),
            Self::Lz4 => lz4_flex::compress_prepend_size(data),
        }
    }

    fn decompress(self, data: &[u8]) -> Result<Vec<u8>, CommonError> {
        match self {
            Self::None => Ok(data.to_vec()),
            Self::Lz4 => {
                lz4_flex::decompress_size_prepended(data).context("Lz4 decompression failed")
            },
        }
    }
}

/// Saves `data` as an uncompressed binary artifact at `path`.
///
/// # Errors
/// * [`CommonError::Binary`] if `data` cannot be encoded.
/// * [`CommonError::Io`] if the file cannot be written.
pub fn save_bin<T>(data: &T, path: impl AsRef<Path>) -> Result<(), CommonError>
where
    T: Serialize + ?Sized,
{
    save_bin_with(data, path, Compression::None)
}

/// Saves `data` as a binary artifact, optionally LZ4-compressed.
///
/// The write is atomic: readers see either the previous artifact or the new one.
///
/// # Errors
/// Same as [`save_bin`].
pub fn save_bin_with<T>(
    data: &T,
    path: impl AsRef<Path>,
    compression: Compression,
) -> Result<(), CommonError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let payload = postcard::to_stdvec(data).context("Postcard encoding failed")?;
    let payload = compression.compress(&payload);

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.push(CONTAINER_VERSION);
    bytes.push(compression.flag());
    bytes.extend_from_slice(&payload);

    write_atomic(path, &bytes)?;

    info!("binary file saved at: {}", path.display());
    Ok(())
}

/// Loads the value stored at `path` by [`save_bin`] or [`save_bin_with`].
///
/// # Errors
/// * [`CommonError::FileNotFound`] / [`CommonError::Io`] if the file cannot be read.
/// * [`CommonError::InvalidArtifact`] if the header is missing or unknown.
/// * [`CommonError::Decompress`] if a compressed payload is corrupted.
/// * [`CommonError::Binary`] if the payload does not decode as `T`.
pub fn load_bin<T>(path: impl AsRef<Path>) -> Result<T, CommonError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let (compression, payload) = split_header(&bytes).context(path.display().to_string())?;
    let payload = compression.decompress(payload)?;
    let data = postcard::from_bytes(&payload).context("Postcard decoding failed")?;

    info!("binary file loaded from: {}", path.display());
    Ok(data)
}

fn split_header(bytes: &[u8]) -> Result<(Compression, &[u8]), CommonError> {
    let invalid =
        |message: String| CommonError::InvalidArtifact { message: message.into(), context: None };

    if bytes.len() < HEADER_LEN || &bytes[..4] != MAGIC {
        return Err(invalid("missing MLPB header".to_owned()));
    }
    if bytes[4] != CONTAINER_VERSION {
        return Err(invalid(format!("unsupported container version {}", bytes[4])));
    }
    let compression = Compression::from_flag(bytes[5])
        .ok_or_else(|| invalid(format!("unknown compression flag {}", bytes[5])))?;

    Ok((compression, &bytes[HEADER_LEN..]))
}
