use std::fmt;
use std::path::PathBuf;

use crate::geometry::SelectionRectangle;

/// Pointer-interaction state of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A press landed on the canvas and the rectangle follows the pointer.
    Selecting(SelectionRectangle),
    /// The release is being processed (crop, prompt, save).
    Finalizing,
}

impl InteractionState {
    pub fn selection(&self) -> Option<&SelectionRectangle> {
        match self {
            Self::Selecting(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Selecting(_) => write!(f, "Selecting"),
            Self::Finalizing => write!(f, "Finalizing"),
        }
    }
}

/// Asks the user where a crop should be written.
pub trait DestinationPicker {
    /// `None` means the user cancelled.
    fn pick_destination(&mut self) -> Option<PathBuf>;
}

/// What a pointer release led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CropOutcome {
    Saved {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// The save prompt was cancelled; the source should be shown again.
    Discarded,
    /// The selection covered no source pixels; nothing was prompted.
    EmptySelection,
    /// Release without a preceding press on the canvas.
    Ignored,
}
