mod interaction;

pub use interaction::{CropOutcome, DestinationPicker, InteractionState};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{CropperConfig, RenderOptions, SurfaceSize};
use crate::error::{CropperError, Result};
use crate::extract::extract;
use crate::geometry::{
    compute_transform, crop_region, CropRegion, DisplayPoint, DisplayTransform,
    SelectionRectangle,
};
use crate::io::image_io::{save_image, with_default_extension};
use crate::io::rasterize::{load_single_page, Rasterizer};
use crate::page::SourceImage;

/// All state of one cropping session, mutated one UI event at a time.
#[derive(Debug)]
pub struct Session {
    config: CropperConfig,
    source: Option<SourceImage>,
    transform: Option<DisplayTransform>,
    state: InteractionState,
    pub options: RenderOptions,
}

impl Session {
    pub fn new(config: CropperConfig) -> Self {
        Self {
            config,
            source: None,
            transform: None,
            state: InteractionState::Idle,
            options: RenderOptions::default(),
        }
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn transform(&self) -> Option<&DisplayTransform> {
        self.transform.as_ref()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Rasterize `path` and make its single page the source image.
    ///
    /// On failure the previously loaded image and transform are kept.
    pub fn load_document(&mut self, path: &Path, rasterizer: &dyn Rasterizer) -> Result<()> {
        let source = load_single_page(rasterizer, path, self.config.dpi)?;
        self.set_source(source)
    }

    /// Replace the source image and refit it to the surface.
    pub fn set_source(&mut self, source: SourceImage) -> Result<()> {
        let surface = self.config.surface;
        let transform =
            compute_transform(source.width(), source.height(), surface.width, surface.height)?;
        info!(
            width = source.width(),
            height = source.height(),
            scale = transform.scale,
            "Source image loaded"
        );
        self.source = Some(source);
        self.transform = Some(transform);
        self.state = InteractionState::Idle;
        Ok(())
    }

    /// Change the display surface and refit the current image.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) -> Result<()> {
        if let Some(source) = &self.source {
            self.transform = Some(compute_transform(
                source.width(),
                source.height(),
                surface.width,
                surface.height,
            )?);
        }
        self.config.surface = surface;
        Ok(())
    }

    /// Start a selection. Ignored while no image is loaded.
    pub fn pointer_press(&mut self, point: DisplayPoint) {
        let Some(transform) = self.transform else {
            debug!("Press ignored, no image loaded");
            return;
        };
        let local = transform.to_image_local(point);
        debug!(x = local.x, y = local.y, "Selection started");
        self.state = InteractionState::Selecting(SelectionRectangle::at(point));
    }

    /// Move the far corner, clamped to the surface.
    pub fn pointer_drag(&mut self, point: DisplayPoint) {
        let Some(transform) = self.transform else {
            return;
        };
        if let InteractionState::Selecting(rect) = &mut self.state {
            rect.current = transform.clamp_to_surface(point);
        }
    }

    /// The source-space region the current selection would crop.
    pub fn pending_region(&self) -> Option<CropRegion> {
        let transform = self.transform.as_ref()?;
        self.state
            .selection()
            .map(|rect| crop_region(rect, transform))
    }

    /// Finish the selection: crop, ask for a destination, save.
    ///
    /// The selection is gone when this returns, whatever the result.
    pub fn pointer_release(
        &mut self,
        point: DisplayPoint,
        picker: &mut dyn DestinationPicker,
    ) -> Result<CropOutcome> {
        let previous = std::mem::replace(&mut self.state, InteractionState::Finalizing);
        let result = self.finalize(previous, point, picker);
        self.state = InteractionState::Idle;
        result
    }

    fn finalize(
        &self,
        previous: InteractionState,
        point: DisplayPoint,
        picker: &mut dyn DestinationPicker,
    ) -> Result<CropOutcome> {
        let (Some(source), Some(transform)) = (&self.source, &self.transform) else {
            return Err(CropperError::NoImageLoaded);
        };
        let InteractionState::Selecting(mut selection) = previous else {
            return Ok(CropOutcome::Ignored);
        };
        selection.current = point;

        let region = crop_region(&selection, transform);
        if region.is_empty() {
            warn!(?region, "Selection covers no pixels");
            return Ok(CropOutcome::EmptySelection);
        }

        let cropped = extract(source, &region, &self.options, self.config.threshold_level);

        let Some(path) = picker.pick_destination() else {
            info!("Save cancelled, crop discarded");
            return Ok(CropOutcome::Discarded);
        };
        let path = with_default_extension(path);
        save_image(&cropped, &path)?;

        Ok(CropOutcome::Saved {
            path,
            width: cropped.width(),
            height: cropped.height(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CropperConfig::default())
    }
}
