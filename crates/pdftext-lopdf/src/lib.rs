use std::path::Path;

use lopdf::Document;

use pdftext_core::{BackendError, PdfBackend, PdfDocument};

/// lopdf-based implementation of [`PdfBackend`].
///
/// Pure Rust, reads the object graph directly and decodes text operators
/// page by page. First in the default fallback chain.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub const NAME: &'static str = "lopdf";

    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        let mut document =
            Document::load(path).map_err(|e| BackendError::OpenError(e.to_string()))?;

        // Many "protected" PDFs use an empty user password.
        if document.is_encrypted() {
            document.decrypt("").map_err(|e| {
                BackendError::ExtractionError(format!("encrypted document: {}", e))
            })?;
        }

        // get_pages() is keyed by 1-based page number, so keys come out in order.
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        tracing::trace!(pages = page_numbers.len(), "lopdf loaded document");

        Ok(Box::new(LopdfDocument {
            document,
            page_numbers,
        }))
    }
}

struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> Result<usize, BackendError> {
        Ok(self.page_numbers.len())
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        let page_number = *self.page_numbers.get(index).ok_or_else(|| {
            BackendError::ExtractionError(format!("page index {} out of range", index))
        })?;
        self.document
            .extract_text(&[page_number])
            .map_err(|e| BackendError::ExtractionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use lopdf::{Object, Stream, dictionary};

    use super::*;

    /// Build a PDF with one Helvetica text line per page; "" gives a blank page.
    fn make_test_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let content = if text.is_empty() {
                Vec::new()
            } else {
                format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET").into_bytes()
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::from(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn write_pdf(dir: &tempfile::TempDir, pages: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, make_test_pdf(pages)).unwrap();
        path
    }

    #[test]
    fn reports_every_page_including_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &["Alpha page", "", "Gamma page"]);

        let doc = LopdfBackend::new().open(&path).ok().unwrap();
        assert_eq!(doc.page_count().unwrap(), 3);
        assert!(doc.page_text(0).unwrap().contains("Alpha"));
        assert!(doc.page_text(1).unwrap().trim().is_empty());
        assert!(doc.page_text(2).unwrap().contains("Gamma"));
    }

    #[test]
    fn out_of_range_page_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &["Only page"]);
        let doc = LopdfBackend::new().open(&path).ok().unwrap();
        assert!(matches!(
            doc.page_text(1),
            Err(BackendError::ExtractionError(_))
        ));
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LopdfBackend::new()
            .open(&dir.path().join("absent.pdf"))
            .err()
            .unwrap();
        assert!(matches!(err, BackendError::OpenError(_)));
    }

    #[test]
    fn non_pdf_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, b"just some text, not a PDF").unwrap();
        assert!(LopdfBackend::new().open(&path).is_err());
    }
}
