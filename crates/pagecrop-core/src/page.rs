use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{CropperError, Result};

/// The full-resolution raster of the loaded document page.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: RgbImage,
    origin: Option<PathBuf>,
}

impl SourceImage {
    /// Wrap a raster, rejecting images with a zero dimension.
    pub fn new(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CropperError::InvalidImage { width, height });
        }
        Ok(Self {
            pixels,
            origin: None,
        })
    }

    pub fn with_origin(mut self, path: &Path) -> Self {
        self.origin = Some(path.to_path_buf());
        self
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Document the page was rasterized from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}
