use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Loads a UTF-8 text file. Empty or whitespace-only files are rejected.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    };

    LoadedDocument::new(content, format!("text:{}", path.display()))
}
