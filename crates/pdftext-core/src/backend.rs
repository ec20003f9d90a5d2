use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend cannot be used in this build or environment.
    #[error("backend not available: {0}")]
    Unavailable(String),
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BackendError::Unavailable(_))
    }
}

/// Trait for PDF text extraction backends.
///
/// A backend only knows how to open a document and hand back its pages;
/// page markers, blank-page skipping and the fallback policy live in
/// [`crate::pages`] and [`crate::orchestrator`].
pub trait PdfBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "lopdf", "MuPDF").
    fn name(&self) -> &str;

    /// Open the PDF at `path`.
    ///
    /// The returned handle owns whatever the library allocated for the
    /// document and releases it on drop.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An open PDF document.
pub trait PdfDocument {
    /// Total number of pages, including pages without a text layer.
    fn page_count(&self) -> Result<usize, BackendError>;

    /// Extract the text of the page at 0-based `index`, in backend order.
    ///
    /// Pages without extractable text return an empty string, not an error.
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}

/// Placeholder for a backend that was not compiled in or was disabled.
///
/// Keeps its slot in the fallback chain so the ordering stays fixed, but
/// every `open` reports [`BackendError::Unavailable`].
pub struct UnavailableBackend {
    name: String,
    reason: String,
}

impl UnavailableBackend {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl PdfBackend for UnavailableBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, _path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        Err(BackendError::Unavailable(self.reason.clone()))
    }
}

/// A document whose pages were fully extracted up front.
///
/// Used by libraries that only offer whole-document extraction.
#[derive(Debug, Clone, Default)]
pub struct PreloadedDocument {
    pages: Vec<String>,
}

impl PreloadedDocument {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }
}

impl PdfDocument for PreloadedDocument {
    fn page_count(&self) -> Result<usize, BackendError> {
        Ok(self.pages.len())
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        self.pages.get(index).cloned().ok_or_else(|| {
            BackendError::ExtractionError(format!(
                "page index {} out of range (document has {} pages)",
                index,
                self.pages.len()
            ))
        })
    }
}
