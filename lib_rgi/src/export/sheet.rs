use log::debug;
use thiserror::Error;

use crate::iconset::format::IconSet;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("icons per row must be greater than zero")]
    ZeroIconsPerRow,
}

/// Grayscale raster of a whole icon set: 0x00 background, 0xFF foreground,
/// one byte per pixel, rows top to bottom.
pub struct IconSheet {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Lays all icons out in a grid of `icons_per_row` columns, each cell
/// `icon_size + 2 * padding` pixels square. Pure function of the set.
pub fn render_sheet(
    set: &IconSet,
    icons_per_row: u16,
    padding: u16,
) -> Result<IconSheet, SheetError> {
    if icons_per_row == 0 {
        return Err(SheetError::ZeroIconsPerRow);
    }

    let count = set.icon_count() as u32;
    let size = set.icon_size() as u32;
    let per_row = icons_per_row as u32;
    let padding = padding as u32;

    let mut rows = count / per_row;
    if count % per_row > 0 {
        rows += 1;
    }

    let cell = size + 2 * padding;
    let width = cell * per_row;
    let height = cell * rows;
    debug!(
        "sheet layout: {} icons, {} per row, {}x{} pixels",
        count, per_row, width, height
    );

    // All pixels black by default
    let mut pixels = vec![0u8; (width * height) as usize];

    let words_per_icon = set.words_per_icon();
    let rows_per_word = 32 / size;

    for (id, icon) in set.data.chunks_exact(words_per_icon).enumerate() {
        let origin_x = (id as u32 % per_row) * cell + padding;
        let origin_y = (id as u32 / per_row) * cell + padding;

        for (w, &word) in icon.iter().enumerate() {
            for k in 0..32u32 {
                if word & (1 << k) != 0 {
                    let x = origin_x + k % size;
                    let y = origin_y + w as u32 * rows_per_word + k / size;
                    pixels[(y * width + x) as usize] = 0xff;
                }
            }
        }
    }

    Ok(IconSheet {
        width,
        height,
        pixels,
    })
}
