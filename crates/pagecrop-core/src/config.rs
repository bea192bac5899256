use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_RASTER_DPI, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_THRESHOLD_LEVEL,
};

/// Session-wide settings, fixed for the lifetime of the application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropperConfig {
    #[serde(default)]
    pub surface: SurfaceSize,
    /// Rasterization resolution in dots per inch.
    pub dpi: u32,
    /// Luma level used by the threshold/invert transform.
    pub threshold_level: u8,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            dpi: DEFAULT_RASTER_DPI,
            threshold_level: DEFAULT_THRESHOLD_LEVEL,
        }
    }
}

/// Fixed size of the on-screen canvas the page is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Post-processing flags applied to every crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub grayscale: bool,
    pub threshold: bool,
}
