use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// The system clipboard is opened on the first write rather than up front, so a
/// session without clipboard access still loads and renders; only the copy
/// action fails.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::ClipboardError(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("clipboard is not available".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let clipboard = self.handle()?;
        clipboard.set_text(text).map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
