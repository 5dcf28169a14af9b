use std::fs;
use std::io::Cursor;
use std::path::Path;

use bincode::ErrorKind;
use thiserror::Error;

use crate::spots::source::SpotOverlay;

/// Compression level used when encoding serialized overlay data.
///
/// We use a named constant to make the chosen level explicit because the
/// per-map spot bundles benefit from aggressive compression to reduce
/// deployment size.
const OVERLAY_COMPRESSION_LEVEL: i32 = 19;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] Box<ErrorKind>),
    #[error("Compression error: {0}")]
    Compression(#[source] std::io::Error),
}

pub fn serialize_overlay(overlay: &SpotOverlay) -> Result<Vec<u8>, DataError> {
    let encoded = bincode::serialize(overlay)?;
    let mut cursor = Cursor::new(encoded);
    zstd::stream::encode_all(&mut cursor, OVERLAY_COMPRESSION_LEVEL).map_err(DataError::Compression)
}

pub fn deserialize_overlay(bytes: &[u8]) -> Result<SpotOverlay, DataError> {
    let mut cursor = Cursor::new(bytes);
    let decoded = zstd::stream::decode_all(&mut cursor).map_err(DataError::Compression)?;
    let overlay: SpotOverlay = bincode::deserialize(&decoded)?;
    Ok(overlay)
}

pub fn write_overlay_to_file<P: AsRef<Path>>(
    overlay: &SpotOverlay,
    path: P,
) -> Result<(), DataError> {
    let bytes = serialize_overlay(overlay)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_overlay_from_file<P: AsRef<Path>>(path: P) -> Result<SpotOverlay, DataError> {
    let bytes = fs::read(path)?;
    deserialize_overlay(&bytes)
}
