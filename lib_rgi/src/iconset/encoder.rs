use log::{debug, info};

use super::format::{IconSet, HEADER_SIZE, NAME_RECORD_SIZE, SIGNATURE, VERSION};

/// Encodes an [`IconSet`] into the rGI byte layout.
///
/// Deterministic: the same set always produces byte-identical output.
pub fn encode(set: &IconSet) -> Vec<u8> {
    let mut encoded_data = Vec::with_capacity(
        HEADER_SIZE + set.icon_count() as usize * NAME_RECORD_SIZE + set.data.len() * 4,
    );

    // Header: signature, version, reserved, icon count, icon size
    encoded_data.extend_from_slice(&SIGNATURE);
    encoded_data.extend_from_slice(&VERSION.to_le_bytes());
    encoded_data.extend_from_slice(&0u16.to_le_bytes());
    encoded_data.extend_from_slice(&set.icon_count().to_le_bytes());
    encoded_data.extend_from_slice(&set.icon_size().to_le_bytes());
    debug!(
        "header written: count={} size={}",
        set.icon_count(),
        set.icon_size()
    );

    // Name records, truncated or NUL-padded to their fixed width
    for name in &set.names {
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_RECORD_SIZE);
        encoded_data.extend_from_slice(&bytes[..len]);
        encoded_data.resize(encoded_data.len() + NAME_RECORD_SIZE - len, 0);
    }

    // Bitmap words for all icons, in icon order
    for &word in &set.data {
        encoded_data.extend_from_slice(&word.to_le_bytes());
    }

    info!(
        "encoded {} icons into {} bytes",
        set.icon_count(),
        encoded_data.len()
    );
    encoded_data
}
