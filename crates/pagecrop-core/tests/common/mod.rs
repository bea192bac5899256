#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use pagecrop_core::error::{CropperError, Result};
use pagecrop_core::io::rasterize::Rasterizer;
use pagecrop_core::session::DestinationPicker;

/// Build an RGB image where each pixel encodes its own position.
///
/// Red = x % 256, green = y % 256, blue = 0.
pub fn coordinate_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 0]))
}

/// Rasterizer returning canned pages, recording the DPI it was asked for.
pub struct FakeRasterizer {
    pub pages: Vec<RgbImage>,
    pub requested_dpi: Cell<Option<u32>>,
}

impl FakeRasterizer {
    pub fn with_pages(pages: Vec<RgbImage>) -> Self {
        Self {
            pages,
            requested_dpi: Cell::new(None),
        }
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(&self, _path: &Path, dpi: u32) -> Result<Vec<RgbImage>> {
        self.requested_dpi.set(Some(dpi));
        Ok(self.pages.clone())
    }
}

/// Rasterizer that always fails, like a corrupt or unreadable file.
pub struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn rasterize(&self, path: &Path, _dpi: u32) -> Result<Vec<RgbImage>> {
        Err(CropperError::Rasterization(format!(
            "cannot open {}",
            path.display()
        )))
    }
}

/// Destination picker answering with a fixed path (or cancel), counting calls.
pub struct ScriptedPicker {
    pub answer: Option<PathBuf>,
    pub calls: usize,
}

impl ScriptedPicker {
    pub fn answering(path: impl Into<PathBuf>) -> Self {
        Self {
            answer: Some(path.into()),
            calls: 0,
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answer: None,
            calls: 0,
        }
    }
}

impl DestinationPicker for ScriptedPicker {
    fn pick_destination(&mut self) -> Option<PathBuf> {
        self.calls += 1;
        self.answer.clone()
    }
}
