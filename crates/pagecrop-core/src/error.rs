use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF: {0}")]
    Rasterization(String),

    #[error("Please upload a one-page PDF file (document has {pages} pages)")]
    MultiPageNotSupported { pages: usize },

    #[error("No PDF image loaded.")]
    NoImageLoaded,

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, CropperError>;
