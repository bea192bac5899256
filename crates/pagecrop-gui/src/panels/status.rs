use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 3 empty lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(source) = app.session.source() {
                ui.label(format!("{}x{}", source.width(), source.height()));
                ui.separator();
            }
            if let Some(t) = app.session.transform() {
                ui.label(format!("Scale: {:.0}%", t.scale * 100.0));
                ui.separator();
            }
            if let Some(region) = app.session.pending_region() {
                ui.label(format!(
                    "Selection: {}x{} at ({}, {})",
                    region.width(),
                    region.height(),
                    region.x1,
                    region.y1
                ));
                ui.separator();
            }
            ui.label(app.session.state().to_string());
        });

        ui.add_space(2.0);
    });
}
