pub mod grayscale;
pub mod threshold;

use image::{imageops, DynamicImage};
use tracing::debug;

use crate::config::RenderOptions;
use crate::geometry::CropRegion;
use crate::page::SourceImage;

use self::grayscale::to_grayscale;
use self::threshold::threshold_invert;

/// Cut `region` out of the source image and apply the enabled transforms.
///
/// The region is expected to be normalized and within the image; a
/// zero-area region produces an empty image. Grayscale output is
/// single-channel 8-bit, as is thresholded output (colour input is reduced
/// to luma first). With no transform enabled the crop stays RGB.
pub fn extract(
    source: &SourceImage,
    region: &CropRegion,
    options: &RenderOptions,
    threshold_level: u8,
) -> DynamicImage {
    let cropped = imageops::crop_imm(
        source.pixels(),
        region.x1,
        region.y1,
        region.width(),
        region.height(),
    )
    .to_image();

    debug!(
        x = region.x1,
        y = region.y1,
        width = cropped.width(),
        height = cropped.height(),
        grayscale = options.grayscale,
        threshold = options.threshold,
        "Extracting crop"
    );

    if !options.grayscale && !options.threshold {
        return DynamicImage::ImageRgb8(cropped);
    }

    let luma = to_grayscale(&cropped);
    if options.threshold {
        DynamicImage::ImageLuma8(threshold_invert(&luma, threshold_level))
    } else {
        DynamicImage::ImageLuma8(luma)
    }
}
