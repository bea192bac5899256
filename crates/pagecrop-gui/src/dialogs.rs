use std::path::PathBuf;

use pagecrop_core::session::DestinationPicker;

/// Ask for the document to open. `None` when cancelled.
pub fn pick_document() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select a one-page PDF file")
        .add_filter("PDF Files", &["pdf"])
        .pick_file()
}

/// Native save dialog offering PNG and JPEG.
pub struct SaveDialog;

impl DestinationPicker for SaveDialog {
    fn pick_destination(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("JPEG Image", &["jpg", "jpeg"])
            .set_file_name("crop.png")
            .save_file()
    }
}
