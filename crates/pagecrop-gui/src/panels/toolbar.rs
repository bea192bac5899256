use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!app.ui_state.is_blocked(), |ui| {
                if ui.button("Upload PDF").clicked() {
                    app.open_document(ctx);
                }
            });
            ui.add_space(10.0);
            ui.checkbox(&mut app.session.options.grayscale, "Convert to Grayscale");
            ui.add_space(10.0);
            ui.checkbox(&mut app.session.options.threshold, "Apply Threshold");
        });
        ui.add_space(6.0);
    });
}
