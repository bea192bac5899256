use tracing::debug;

use crate::error::{CropperError, Result};

use super::region::{CropRegion, DisplayPoint, SelectionRectangle, SourcePoint};

/// How the source image is fitted and centered inside the display surface.
///
/// The scale is uniform in both axes. Offsets position the scaled image's
/// top-left corner on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl DisplayTransform {
    /// Clamp a pointer position to the bounds of the display surface.
    pub fn clamp_to_surface(&self, point: DisplayPoint) -> DisplayPoint {
        DisplayPoint::new(
            point.x.clamp(0.0, self.surface_width as f64),
            point.y.clamp(0.0, self.surface_height as f64),
        )
    }

    /// Translate a surface point into image-local display coordinates
    /// (offset removed, still scaled).
    pub fn to_image_local(&self, point: DisplayPoint) -> DisplayPoint {
        DisplayPoint::new(
            point.x - self.offset_x as f64,
            point.y - self.offset_y as f64,
        )
    }
}

/// Fit a `source_width`×`source_height` image inside the surface while
/// preserving its aspect ratio, and center it.
pub fn compute_transform(
    source_width: u32,
    source_height: u32,
    surface_width: u32,
    surface_height: u32,
) -> Result<DisplayTransform> {
    if source_width == 0 || source_height == 0 {
        return Err(CropperError::InvalidImage {
            width: source_width,
            height: source_height,
        });
    }
    if surface_width == 0 || surface_height == 0 {
        return Err(CropperError::InvalidImage {
            width: surface_width,
            height: surface_height,
        });
    }

    let scale = (surface_width as f64 / source_width as f64)
        .min(surface_height as f64 / source_height as f64);

    // Rounding can only overshoot the limiting axis by float noise, so the
    // min() keeps the scaled image on the surface.
    let scaled_width = ((source_width as f64 * scale).round() as u32).min(surface_width);
    let scaled_height = ((source_height as f64 * scale).round() as u32).min(surface_height);

    let offset_x = (surface_width - scaled_width) / 2;
    let offset_y = (surface_height - scaled_height) / 2;

    debug!(
        scale,
        scaled_width, scaled_height, offset_x, offset_y, "Display transform computed"
    );

    Ok(DisplayTransform {
        scale,
        scaled_width,
        scaled_height,
        offset_x,
        offset_y,
        source_width,
        source_height,
        surface_width,
        surface_height,
    })
}

/// Convert a surface point to a source pixel position.
///
/// The offset is removed, the result is clamped to the scaled image, then
/// divided by the scale and truncated. Clamping happens before the division
/// so a bound never lands past the image edge.
pub fn to_source_coordinates(point: DisplayPoint, transform: &DisplayTransform) -> SourcePoint {
    let local = transform.to_image_local(point);
    let x = local.x.clamp(0.0, transform.scaled_width as f64);
    let y = local.y.clamp(0.0, transform.scaled_height as f64);

    SourcePoint::new(
        ((x / transform.scale) as u32).min(transform.source_width),
        ((y / transform.scale) as u32).min(transform.source_height),
    )
}

/// Where a source pixel position lands on the surface.
pub fn to_display_coordinates(point: SourcePoint, transform: &DisplayTransform) -> DisplayPoint {
    DisplayPoint::new(
        point.x as f64 * transform.scale + transform.offset_x as f64,
        point.y as f64 * transform.scale + transform.offset_y as f64,
    )
}

/// Map a pointer-drawn selection onto the source image.
///
/// Both corners are clamped to the surface, ordered, then converted. A
/// selection lying entirely in the margin around the image yields a
/// zero-area region.
pub fn crop_region(selection: &SelectionRectangle, transform: &DisplayTransform) -> CropRegion {
    let clamped = SelectionRectangle {
        anchor: transform.clamp_to_surface(selection.anchor),
        current: transform.clamp_to_surface(selection.current),
    };
    let (top_left, bottom_right) = clamped.normalized();

    CropRegion::from_corners(
        to_source_coordinates(top_left, transform),
        to_source_coordinates(bottom_right, transform),
    )
}
