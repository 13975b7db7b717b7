use log::{debug, error, info};
use thiserror::Error;

use super::format::{ConfigError, IconSet, HEADER_SIZE, NAME_RECORD_SIZE, SIGNATURE, VERSION};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid signature, not an rGI icon set")]
    InvalidSignature,
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),
    #[error("unexpected end of data while reading the header")]
    TruncatedHeader,
    #[error("unexpected end of data while reading name record #{0}")]
    TruncatedName(usize),
    #[error("unexpected end of data while reading bitmap #{0}")]
    TruncatedBitmap(usize),
    #[error("header declares an unusable icon layout")]
    InvalidLayout(#[from] ConfigError),
}

/// Decodes an rGI byte stream into a fresh [`IconSet`].
///
/// Nothing is partially applied on failure: the caller's previous set, if
/// any, stays untouched and valid.
pub fn decode(encoded_data: &[u8]) -> Result<IconSet, DecodeError> {
    // Check the signature
    if encoded_data.len() < SIGNATURE.len() || !encoded_data.starts_with(&SIGNATURE) {
        error!("invalid signature, not an rGI stream");
        return Err(DecodeError::InvalidSignature);
    }
    if encoded_data.len() < HEADER_SIZE {
        error!(
            "header needs {} bytes, got {}",
            HEADER_SIZE,
            encoded_data.len()
        );
        return Err(DecodeError::TruncatedHeader);
    }

    let version = u16::from_le_bytes([encoded_data[4], encoded_data[5]]);
    if version != VERSION {
        error!("unsupported version {}", version);
        return Err(DecodeError::UnsupportedVersion(version));
    }
    // Bytes 6..8 are reserved, ignored on read

    let icon_count = u16::from_le_bytes([encoded_data[8], encoded_data[9]]);
    let icon_size = u16::from_le_bytes([encoded_data[10], encoded_data[11]]);
    debug!(
        "header: version={} count={} size={}",
        version, icon_count, icon_size
    );

    let mut set = IconSet::new(icon_count, icon_size)?;
    let mut cursor = HEADER_SIZE;

    // Name records are fixed-width byte fields, not C strings: a record
    // filled with 32 non-NUL bytes carries no terminator.
    for i in 0..icon_count as usize {
        let Some(record) = encoded_data.get(cursor..cursor + NAME_RECORD_SIZE) else {
            error!("unexpected end of data while reading name record #{}", i);
            return Err(DecodeError::TruncatedName(i));
        };
        let end = record
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_RECORD_SIZE);
        set.names[i] = String::from_utf8_lossy(&record[..end]).into_owned();
        cursor += NAME_RECORD_SIZE;
    }

    let words_per_icon = set.words_per_icon();
    for i in 0..icon_count as usize {
        for w in 0..words_per_icon {
            let Some(bytes) = encoded_data.get(cursor..cursor + 4) else {
                error!("unexpected end of data while reading bitmap #{}", i);
                return Err(DecodeError::TruncatedBitmap(i));
            };
            set.data[i * words_per_icon + w] =
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            cursor += 4;
        }
    }

    info!(
        "decoded {} icons of {}x{} pixels ({} bytes read)",
        icon_count, icon_size, icon_size, cursor
    );
    Ok(set)
}
