use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::info;

use crate::consts::DEFAULT_SAVE_EXTENSION;
use crate::error::{CropperError, Result};

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| CropperError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Image saved"
    );
    Ok(())
}

/// Append the default extension to a path that has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}
