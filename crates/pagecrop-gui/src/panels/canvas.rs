use pagecrop_core::geometry::DisplayTransform;

use crate::app::CropperApp;
use crate::panels::crop_interaction;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let surface = app.session.config().surface;
                let (rect, _response) = ui.allocate_exact_size(
                    egui::vec2(surface.width as f32, surface.height as f32),
                    egui::Sense::click_and_drag(),
                );
                paint_background(ui, rect);

                if !app.ui_state.is_blocked() {
                    crop_interaction::handle_pointer(ctx, ui, app, rect);
                }

                let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
                match (texture_id, app.session.transform().copied()) {
                    (Some(id), Some(transform)) => {
                        draw_image(ui, id, image_rect(rect, &transform));
                        if let Some(selection) = app.session.state().selection() {
                            crop_interaction::draw_selection(ui, rect, selection);
                        }
                        draw_viewing_label(ui, rect, &app.viewport.viewing_label);
                    }
                    _ => show_placeholder(ui, rect),
                }
            });
        });
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, 0.0, egui::Color32::GRAY);
}

/// Screen rect of the scaled image inside the surface.
fn image_rect(surface: egui::Rect, transform: &DisplayTransform) -> egui::Rect {
    egui::Rect::from_min_size(
        surface.min + egui::vec2(transform.offset_x as f32, transform.offset_y as f32),
        egui::vec2(transform.scaled_width as f32, transform.scaled_height as f32),
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Upload a one-page PDF to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(60),
    );
}
