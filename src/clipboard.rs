//! System clipboard access

use crate::error::ClipboardError;

/// Clipboard backend the copy action writes through
pub trait Clipboard: Send + Sync {
    /// Places plain text on the clipboard
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the operating system
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
