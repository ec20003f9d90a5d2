//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend, PdfDocument, PreloadedDocument};

/// A configurable response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Open succeeds with these page texts.
    Pages(Vec<String>),
    /// Open succeeds, but reading page `fail_at` errors.
    FailOnPage { pages: Vec<String>, fail_at: usize },
    /// Open fails with [`BackendError::OpenError`].
    OpenError(String),
    /// Open panics, like a library choking on malformed input.
    Panic(String),
}

/// Shared handle onto a mock's call count, usable after the mock is boxed.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
pub struct MockBackend {
    name: &'static str,
    response: MockResponse,
    calls: CallCounter,
}

impl MockBackend {
    pub fn new(name: &'static str, response: MockResponse) -> Self {
        Self {
            name,
            response,
            calls: CallCounter::default(),
        }
    }

    /// How many times `open()` has been called.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl PdfBackend for MockBackend {
    fn name(&self) -> &str {
        self.name
    }

    fn open(&self, _path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Pages(pages) => Ok(Box::new(PreloadedDocument::new(pages.clone()))),
            MockResponse::FailOnPage { pages, fail_at } => Ok(Box::new(FailingDocument {
                inner: PreloadedDocument::new(pages.clone()),
                fail_at: *fail_at,
            })),
            MockResponse::OpenError(msg) => Err(BackendError::OpenError(msg.clone())),
            MockResponse::Panic(msg) => panic!("{}", msg),
        }
    }
}

struct FailingDocument {
    inner: PreloadedDocument,
    fail_at: usize,
}

impl PdfDocument for FailingDocument {
    fn page_count(&self) -> Result<usize, BackendError> {
        self.inner.page_count()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        if index == self.fail_at {
            return Err(BackendError::ExtractionError(format!(
                "corrupt content stream on page {}",
                index + 1
            )));
        }
        self.inner.page_text(index)
    }
}
