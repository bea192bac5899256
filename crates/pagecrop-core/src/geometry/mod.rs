pub mod region;
pub mod transform;

pub use region::{CropRegion, DisplayPoint, SelectionRectangle, SourcePoint};
pub use transform::{
    compute_transform, crop_region, to_display_coordinates, to_source_coordinates,
    DisplayTransform,
};
