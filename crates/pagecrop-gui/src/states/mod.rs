mod pointer;
mod ui;
mod viewport;

pub use ui::{MessageKind, UIState};
pub use viewport::ViewportState;
