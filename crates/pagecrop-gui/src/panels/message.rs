use crate::app::CropperApp;
use crate::states::MessageKind;

/// Show the pending modal message, if any.
pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    let Some(message) = &app.ui_state.message else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(message.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let text = egui::RichText::new(message.body.as_str());
                match message.kind {
                    MessageKind::Error => ui.label(text.color(egui::Color32::from_rgb(230, 80, 80))),
                    MessageKind::Info => ui.label(text),
                };
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        app.ui_state.message = None;
    }
}
