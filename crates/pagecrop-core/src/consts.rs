/// Default display surface width, in logical units.
pub const DEFAULT_SURFACE_WIDTH: u32 = 600;

/// Default display surface height, in logical units.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 800;

/// Resolution used when rasterizing the document page.
pub const DEFAULT_RASTER_DPI: u32 = 200;

/// PDF user-space units per inch.
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Luma at or below this level becomes white after thresholding; above it, black.
pub const DEFAULT_THRESHOLD_LEVEL: u8 = 158;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Extension appended to save paths that carry none.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";
