use std::path::{Path, PathBuf};

use pagecrop_core::config::CropperConfig;
use pagecrop_core::error::CropperError;
use pagecrop_core::geometry::DisplayPoint;
use pagecrop_core::io::rasterize::PdfiumRasterizer;
use pagecrop_core::session::{CropOutcome, Session};
use tracing::{error, info};

use crate::convert::source_to_color_image;
use crate::dialogs::{self, SaveDialog};
use crate::panels;
use crate::states::{UIState, ViewportState};

pub struct CropperApp {
    pub session: Session,
    pub rasterizer: PdfiumRasterizer,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl CropperApp {
    pub fn new() -> Self {
        Self {
            session: Session::new(CropperConfig::default()),
            rasterizer: pdfium_rasterizer(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        }
    }

    /// Ask for a PDF and load it. Cancelling the dialog does nothing.
    pub fn open_document(&mut self, ctx: &egui::Context) {
        if let Some(path) = dialogs::pick_document() {
            self.load_document(ctx, &path);
        }
    }

    fn load_document(&mut self, ctx: &egui::Context, path: &Path) {
        match self.session.load_document(path, &self.rasterizer) {
            Ok(()) => {
                self.refresh_viewport(ctx);
                if let Some(source) = self.session.source() {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        source.width(),
                        source.height()
                    ));
                }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Load failed");
                let body = match e {
                    CropperError::MultiPageNotSupported { .. } => {
                        "Please upload a one-page PDF file.".to_string()
                    }
                    CropperError::Rasterization(_) => e.to_string(),
                    other => format!("Failed to load PDF: {other}"),
                };
                self.ui_state.show_error(body);
            }
        }
    }

    /// Upload the current source at its display size.
    pub fn refresh_viewport(&mut self, ctx: &egui::Context) {
        let (Some(source), Some(transform)) = (self.session.source(), self.session.transform())
        else {
            return;
        };
        let image = source_to_color_image(source, transform);
        self.viewport.texture =
            Some(ctx.load_texture("page", image, egui::TextureOptions::LINEAR));
        self.viewport.viewing_label = source
            .origin()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
    }

    /// Finish the selection under the pointer and report what happened.
    pub fn finish_crop(&mut self, ctx: &egui::Context, pos: DisplayPoint) {
        match self.session.pointer_release(pos, &mut SaveDialog) {
            Ok(CropOutcome::Saved {
                path,
                width,
                height,
            }) => {
                info!(path = %path.display(), width, height, "Crop saved");
                self.ui_state
                    .show_info("Success", format!("Cropped image saved to {}.", path.display()));
            }
            Ok(CropOutcome::Discarded) => {
                self.ui_state.add_log("Save cancelled".into());
                self.refresh_viewport(ctx);
            }
            Ok(CropOutcome::EmptySelection) => {
                self.ui_state
                    .add_log("Selection is outside the page, nothing to crop".into());
            }
            Ok(CropOutcome::Ignored) => {}
            Err(CropperError::NoImageLoaded) => {
                self.ui_state.show_error(CropperError::NoImageLoaded.to_string());
            }
            Err(e) => {
                error!(error = %e, "Crop failed");
                self.ui_state.show_error(format!("Failed to crop image: {e}"));
            }
        }
    }
}

impl Default for CropperApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::canvas::show(ctx, self);
        panels::message::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About PDF Cropper")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("PDF Cropper");
                        ui.label("Crop a region of a one-page PDF to an image");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

/// Prefer a PDFium library shipped next to the executable.
fn pdfium_rasterizer() -> PdfiumRasterizer {
    let exe_dir: Option<PathBuf> = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(dir) => PdfiumRasterizer::with_library_dir(dir),
        None => PdfiumRasterizer::new(),
    }
}
