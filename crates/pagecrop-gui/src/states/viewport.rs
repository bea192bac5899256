/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    /// The source image, already scaled to its on-screen size.
    pub texture: Option<egui::TextureHandle>,
    pub viewing_label: String,
}
