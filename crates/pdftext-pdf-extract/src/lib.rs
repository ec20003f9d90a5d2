use std::path::Path;

use pdftext_core::{BackendError, PdfBackend, PdfDocument, PreloadedDocument};

/// pdf-extract based implementation of [`PdfBackend`].
///
/// pdf-extract lays out glyphs from the content stream, which copes with
/// some documents where operator-level decoding returns nothing. It only
/// extracts whole documents, so every page is read during `open`.
///
/// The library is known to panic on some malformed fonts; the orchestrator
/// converts such panics into an ordinary attempt failure.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub const NAME: &'static str = "pdf-extract";

    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        let bytes = std::fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| BackendError::OpenError(e.to_string()))?;
        tracing::trace!(pages = pages.len(), bytes = bytes.len(), "pdf-extract read document");
        Ok(Box::new(PreloadedDocument::new(pages)))
    }
}
