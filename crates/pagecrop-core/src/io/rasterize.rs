use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage, RgbaImage};
use pdfium_render::prelude::*;
use tracing::{debug, info, warn};

use crate::consts::PDF_POINTS_PER_INCH;
use crate::error::{CropperError, Result};
use crate::page::SourceImage;

/// Renders a document into one raster per page.
pub trait Rasterizer {
    /// Rasterize every page of `path` at `dpi`, in page order.
    fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<RgbImage>>;
}

/// Rasterize `path` and insist on exactly one page.
pub fn load_single_page(
    rasterizer: &dyn Rasterizer,
    path: &Path,
    dpi: u32,
) -> Result<SourceImage> {
    let mut pages = rasterizer.rasterize(path, dpi)?;
    if pages.len() != 1 {
        warn!(pages = pages.len(), path = %path.display(), "Rejected document");
        return Err(CropperError::MultiPageNotSupported { pages: pages.len() });
    }

    let page = pages.remove(0);
    info!(
        path = %path.display(),
        width = page.width(),
        height = page.height(),
        dpi,
        "Page rasterized"
    );
    Ok(SourceImage::new(page)?.with_origin(path))
}

/// PDFium-backed rasterizer.
///
/// The library is bound on first use, preferring a copy in `library_dir`
/// and falling back to the system library.
#[derive(Default)]
pub struct PdfiumRasterizer {
    library_dir: Option<PathBuf>,
    pdfium: OnceCell<Pdfium>,
}

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for the PDFium shared library in `dir` before the system paths.
    pub fn with_library_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: Some(dir.into()),
            pdfium: OnceCell::new(),
        }
    }

    fn pdfium(&self) -> Result<&Pdfium> {
        if self.pdfium.get().is_none() {
            let pdfium = self.bind()?;
            let _ = self.pdfium.set(pdfium);
        }
        self.pdfium
            .get()
            .ok_or_else(|| CropperError::Rasterization("PDFium not initialised".into()))
    }

    fn bind(&self) -> Result<Pdfium> {
        let bindings = match &self.library_dir {
            Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                .or_else(|_| Pdfium::bind_to_system_library()),
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| CropperError::Rasterization(format!("PDFium library unavailable: {e}")))?;
        debug!("PDFium bound");
        Ok(Pdfium::new(bindings))
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<RgbImage>> {
        let pdfium = self.pdfium()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| CropperError::Rasterization(e.to_string()))?;

        let render_config =
            PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / PDF_POINTS_PER_INCH);

        let mut rasters = Vec::new();
        for page in document.pages().iter() {
            let bitmap = page
                .render_with_config(&render_config)
                .map_err(|e| CropperError::Rasterization(e.to_string()))?;
            let width = bitmap.width() as u32;
            let height = bitmap.height() as u32;
            let rgba = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes()).ok_or_else(
                || {
                    CropperError::Rasterization(format!(
                        "page bitmap does not match {width}x{height}"
                    ))
                },
            )?;
            rasters.push(DynamicImage::ImageRgba8(rgba).to_rgb8());
        }
        Ok(rasters)
    }
}
