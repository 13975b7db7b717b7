use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use super::decoder::{decode, DecodeError};
use super::encoder::encode;
use super::format::IconSet;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Reads and decodes an icon-set file.
pub fn load_iconset<P: AsRef<Path>>(path: P) -> Result<IconSet, FileError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let set = decode(&data)?;
    info!("loaded {} icons from {}", set.icon_count(), path.display());
    Ok(set)
}

/// Encodes and writes an icon-set file.
///
/// The bytes go to a temporary sibling file that is renamed over the
/// destination, so a failed write never leaves a truncated file behind.
pub fn save_iconset<P: AsRef<Path>>(path: P, set: &IconSet) -> Result<(), FileError> {
    let path = path.as_ref();
    let encoded = encode(set);

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &encoded)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }

    info!("saved {} bytes to {}", encoded.len(), path.display());
    Ok(())
}
