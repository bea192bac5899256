use super::pointer::CanvasPointer;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A modal message waiting for the user to dismiss it.
pub struct MessageDialog {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Modal message, blocks canvas input while shown.
    pub message: Option<MessageDialog>,

    pub pointer: CanvasPointer,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn show_info(&mut self, title: &str, body: String) {
        self.add_log(body.clone());
        self.message = Some(MessageDialog {
            kind: MessageKind::Info,
            title: title.to_string(),
            body,
        });
    }

    pub fn show_error(&mut self, body: String) {
        self.add_log(format!("ERROR: {body}"));
        self.message = Some(MessageDialog {
            kind: MessageKind::Error,
            title: "Error".to_string(),
            body,
        });
    }

    pub fn is_blocked(&self) -> bool {
        self.message.is_some() || self.show_about
    }
}
