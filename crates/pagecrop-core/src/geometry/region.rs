/// A point on the display surface, relative to the surface origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pixel position in the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourcePoint {
    pub x: u32,
    pub y: u32,
}

impl SourcePoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The rectangle being drawn with the pointer, in display coordinates.
///
/// `anchor` is where the press happened; `current` follows the drag.
/// Corners are not ordered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRectangle {
    pub anchor: DisplayPoint,
    pub current: DisplayPoint,
}

impl SelectionRectangle {
    /// A zero-size rectangle at the press position.
    pub fn at(anchor: DisplayPoint) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    /// Top-left and bottom-right corners.
    pub fn normalized(&self) -> (DisplayPoint, DisplayPoint) {
        (
            DisplayPoint::new(
                self.anchor.x.min(self.current.x),
                self.anchor.y.min(self.current.y),
            ),
            DisplayPoint::new(
                self.anchor.x.max(self.current.x),
                self.anchor.y.max(self.current.y),
            ),
        )
    }
}

/// A rectangle in source pixel space covering `[x1, x2) × [y1, y2)`.
///
/// Always satisfies `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRegion {
    /// Build a region from two arbitrary corners.
    pub fn from_corners(a: SourcePoint, b: SourcePoint) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// True when the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
