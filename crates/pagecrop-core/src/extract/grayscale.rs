use image::{GrayImage, Luma, RgbImage};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// Perceptual luma of an 8-bit RGB triple (ITU-R BT.601 weights).
pub fn luma(rgb: [u8; 3]) -> u8 {
    let y = LUMINANCE_R * rgb[0] as f32 + LUMINANCE_G * rgb[1] as f32 + LUMINANCE_B * rgb[2] as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Reduce an RGB image to a single luma channel.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut out = GrayImage::new(w, h);
    for (x, y, pixel) in image.enumerate_pixels() {
        out.put_pixel(x, y, Luma([luma(pixel.0)]));
    }
    out
}
