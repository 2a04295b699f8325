//! PNG export for cell surfaces and contact sheets

use crate::io::error::{Result, TreeError, file_system_error};
use image::RgbaImage;
use std::path::Path;

/// Write an RGBA image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| TreeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "image written");
    Ok(())
}
