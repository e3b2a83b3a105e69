use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;
pub mod wikipedia;

pub use wikipedia::{Article, ArticleSource, WikipediaClient};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing to read in {0}")]
    EmptyDocument(String),

    #[error("Could not fetch an article from Wikipedia")]
    ArticleUnavailable,
}

/// Raw document text plus a short label of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

impl LoadedDocument {
    /// Wraps loader output, rejecting documents with no readable words.
    pub fn new(text: String, source: String) -> Result<Self, LoadError> {
        if text.trim().is_empty() {
            return Err(LoadError::EmptyDocument(source));
        }
        Ok(Self { text, source })
    }
}

impl From<Article> for LoadedDocument {
    fn from(article: Article) -> Self {
        Self {
            source: format!("wikipedia:{}", article.title),
            text: article.extract,
        }
    }
}

/// Loads a file, choosing the reader by extension (PDF, EPUB, else text).
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document_rejected() {
        let result = LoadedDocument::new("  \n ".to_string(), "text:x".to_string());
        assert!(matches!(result, Err(LoadError::EmptyDocument(src)) if src == "text:x"));
    }

    #[test]
    fn test_article_into_document() {
        let article = Article {
            extract: "Body text.".to_string(),
            title: "Some Topic".to_string(),
            href: "https://en.wikipedia.org/wiki/Some_Topic".to_string(),
        };
        let doc = LoadedDocument::from(article);
        assert_eq!(doc.text, "Body text.");
        assert_eq!(doc.source, "wikipedia:Some Topic");
    }

    #[test]
    fn test_load_path_missing_pdf() {
        let result = load_path("/nonexistent/path/document.PDF");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_path_dispatches_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# Heading\nbody").unwrap();
        let doc = load_path(path.to_str().unwrap()).unwrap();
        assert!(doc.source.starts_with("text:"));
        assert_eq!(doc.text, "# Heading\nbody");
    }
}
