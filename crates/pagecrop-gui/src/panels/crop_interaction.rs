use pagecrop_core::geometry::{DisplayPoint, SelectionRectangle};

use crate::app::CropperApp;

/// Convert a screen position to surface-relative display coordinates.
pub fn screen_to_surface(pos: egui::Pos2, surface: egui::Rect) -> DisplayPoint {
    DisplayPoint::new((pos.x - surface.left()) as f64, (pos.y - surface.top()) as f64)
}

/// Convert surface-relative display coordinates back to screen space.
fn surface_to_screen(point: DisplayPoint, surface: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        point.x as f32 + surface.left(),
        point.y as f32 + surface.top(),
    )
}

/// Feed primary-button press, drag and release on the canvas to the session.
///
/// A press outside the surface is not captured, so its release is ignored
/// too.
pub fn handle_pointer(ctx: &egui::Context, ui: &egui::Ui, app: &mut CropperApp, surface: egui::Rect) {
    let (pressed, down, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if pressed {
        if let Some(pos) = pos.filter(|p| surface.contains(*p)) {
            let point = screen_to_surface(pos, surface);
            app.ui_state.pointer.capture(point);
            app.session.pointer_press(point);
        }
    }

    if !app.ui_state.pointer.captured {
        update_cursor(ctx, ui, app, surface);
        return;
    }

    if let Some(pos) = pos {
        let point = screen_to_surface(pos, surface);
        app.ui_state.pointer.last_pos = Some(point);
        if down {
            app.session.pointer_drag(point);
        }
    }

    if released {
        if let Some(point) = app.ui_state.pointer.release() {
            app.finish_crop(ctx, point);
        }
    }

    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
}

fn update_cursor(ctx: &egui::Context, ui: &egui::Ui, app: &CropperApp, surface: egui::Rect) {
    if app.session.source().is_none() {
        return;
    }
    if let Some(hover) = ui.input(|i| i.pointer.hover_pos()) {
        if surface.contains(hover) {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}

/// Draw the in-progress selection as a red outline.
pub fn draw_selection(ui: &egui::Ui, surface: egui::Rect, selection: &SelectionRectangle) {
    let rect = egui::Rect::from_two_pos(
        surface_to_screen(selection.anchor, surface),
        surface_to_screen(selection.current, surface),
    );
    ui.painter().rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(2.0, egui::Color32::RED),
        egui::epaint::StrokeKind::Middle,
    );
}
