//! Persisting rendered assets with the encoder implied by the file extension

use crate::io::error::{GraphicsError, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Ensure the output directory already exists
///
/// The batch never creates it; a missing directory is fatal.
///
/// # Errors
///
/// Returns an error if the path does not exist or is not a directory
pub fn require_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else if dir.exists() {
        Err(crate::io::error::invalid_parameter(
            "output-dir",
            &dir.display(),
            &"path exists but is not a directory",
        ))
    } else {
        Err(GraphicsError::MissingOutputDirectory {
            path: dir.to_path_buf(),
        })
    }
}

/// Write `image` to `dir/file_name` in a single save call
///
/// JPEG is used for `.jpg` names and PNG for `.png`.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory does not exist
/// - The encoder rejects the image (e.g. an alpha channel bound for JPEG)
/// - The file cannot be written
pub fn save_asset(image: &DynamicImage, dir: &Path, file_name: &str) -> Result<PathBuf> {
    require_output_dir(dir)?;
    let path = dir.join(file_name);

    image.save(&path).map_err(|e| GraphicsError::ImageExport {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
