use image::imageops::{self, FilterType};
use pagecrop_core::geometry::DisplayTransform;
use pagecrop_core::page::SourceImage;

/// Resize the source to its on-screen size and convert it to an egui ColorImage.
pub fn source_to_color_image(source: &SourceImage, transform: &DisplayTransform) -> egui::ColorImage {
    let w = transform.scaled_width.max(1);
    let h = transform.scaled_height.max(1);
    let scaled = imageops::resize(source.pixels(), w, h, FilterType::Triangle);
    egui::ColorImage::from_rgb([w as usize, h as usize], scaled.as_raw())
}
