use super::{LoadError, LoadedDocument};

/// Reads the current text contents of the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    LoadedDocument::new(text, "clipboard".to_string())
}
