use image::GrayImage;

/// Binarize at `level`, then invert.
///
/// Luma `p <= level` maps to 255 (white), `p > level` to 0 (black).
pub fn threshold_value(p: u8, level: u8) -> u8 {
    let binary = if p > level { 255 } else { 0 };
    255 - binary
}

/// Apply [`threshold_value`] to every pixel.
pub fn threshold_invert(image: &GrayImage, level: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = threshold_value(pixel.0[0], level);
    }
    out
}
