use std::fs;
use std::io;
use std::path::Path;

use image::ImageError;
use lib_rgi::constants::FILE_EXT;
use lib_rgi::export::sheet::SheetError;
use lib_rgi::export::{export_as_code, render_sheet};
use lib_rgi::iconset::file::{save_iconset, FileError};
use lib_rgi::iconset::format::{BoundsError, ConfigError};
use lib_rgi::IconSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("image processing error: {0}")]
    Image(#[from] ImageError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("unsupported output extension (expected rgi, png or h)")]
    UnsupportedExtension,
}

/// Writes `set` to `path` in the format selected by the path's extension:
/// rGI binary, PNG sheet image or C header.
pub fn write_output(
    set: &IconSet,
    path: &Path,
    icons_per_row: u16,
    padding: u16,
) -> Result<(), ToolError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ToolError::UnsupportedExtension)?;

    match ext {
        FILE_EXT => Ok(save_iconset(path, set)?),
        "png" => write_sheet_png(set, path, icons_per_row, padding),
        "h" => Ok(fs::write(path, export_as_code(set))?),
        _ => Err(ToolError::UnsupportedExtension),
    }
}

fn write_sheet_png(
    set: &IconSet,
    path: &Path,
    icons_per_row: u16,
    padding: u16,
) -> Result<(), ToolError> {
    let sheet = render_sheet(set, icons_per_row, padding)?;
    image::save_buffer(
        path,
        &sheet.pixels,
        sheet.width,
        sheet.height,
        image::ExtendedColorType::L8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rejects_unknown_extension() {
        let set = IconSet::new(1, 16).unwrap();
        let result = write_output(&set, &PathBuf::from("out.bmp"), 16, 1);
        assert!(matches!(result, Err(ToolError::UnsupportedExtension)));
    }

    #[test]
    fn test_rejects_extensionless_path() {
        let set = IconSet::new(1, 16).unwrap();
        let result = write_output(&set, &PathBuf::from("out"), 16, 1);
        assert!(matches!(result, Err(ToolError::UnsupportedExtension)));
    }
}
