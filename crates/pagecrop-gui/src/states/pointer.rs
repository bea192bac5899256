use pagecrop_core::geometry::DisplayPoint;

/// Tracks a primary-button press that started on the canvas.
#[derive(Default)]
pub struct CanvasPointer {
    /// True from a press on the canvas until the matching release.
    pub captured: bool,
    /// Last pointer position seen while captured, in surface coords.
    pub last_pos: Option<DisplayPoint>,
}

impl CanvasPointer {
    pub fn capture(&mut self, pos: DisplayPoint) {
        self.captured = true;
        self.last_pos = Some(pos);
    }

    pub fn release(&mut self) -> Option<DisplayPoint> {
        self.captured = false;
        self.last_pos.take()
    }
}
