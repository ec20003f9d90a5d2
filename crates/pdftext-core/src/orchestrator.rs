use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::backend::{BackendError, PdfBackend};
use crate::pages::assemble_document;
use crate::{Attempt, AttemptOutcome, Extraction, ProgressEvent, RunOutcome};

/// Document read when no other input is configured.
pub const DEFAULT_INPUT_PATH: &str = "downloads/00_CPE_generalites.pdf";
/// File the extracted text is written to.
pub const DEFAULT_OUTPUT_PATH: &str = "pdf_extracted_text.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Runs a fixed, ordered chain of backends against one input file.
pub struct Orchestrator {
    config: ExtractConfig,
    backends: Vec<Box<dyn PdfBackend>>,
}

impl Orchestrator {
    pub fn new(config: ExtractConfig, backends: Vec<Box<dyn PdfBackend>>) -> Self {
        Self { config, backends }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Names of the backends in the order they will be tried.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Try each backend in order, stopping at the first non-blank result.
    ///
    /// Never fails: backend errors, unavailability and blank output all move
    /// on to the next backend. On success the text is written to the output
    /// path, overwriting it. If every backend fails the output is untouched.
    pub fn run(&self, progress: &mut dyn FnMut(ProgressEvent)) -> RunOutcome {
        let mut failed = Vec::new();

        for backend in &self.backends {
            let name = backend.name().to_string();
            progress(ProgressEvent::Trying {
                backend: name.clone(),
            });

            match self.attempt(backend.as_ref(), progress) {
                AttemptOutcome::Success(text) => {
                    tracing::info!(backend = %name, "extraction succeeded");
                    progress(ProgressEvent::Succeeded {
                        backend: name.clone(),
                    });
                    return self.save(Extraction::new(name, text), failed);
                }
                outcome => {
                    match &outcome {
                        AttemptOutcome::Unavailable(reason) => {
                            tracing::info!(backend = %name, reason = %reason, "backend unavailable")
                        }
                        AttemptOutcome::Error(reason) => {
                            tracing::warn!(backend = %name, error = %reason, "backend failed")
                        }
                        _ => tracing::info!(backend = %name, "backend returned no text"),
                    }
                    progress(ProgressEvent::Failed {
                        backend: name.clone(),
                        outcome: outcome.clone(),
                    });
                    failed.push(Attempt {
                        backend: name,
                        outcome,
                    });
                }
            }
        }

        let input_size = std::fs::metadata(&self.config.input_path)
            .ok()
            .map(|m| m.len());
        tracing::warn!(
            input = %self.config.input_path.display(),
            attempts = failed.len(),
            "all backends failed"
        );
        RunOutcome::AllFailed { failed, input_size }
    }

    fn attempt(
        &self,
        backend: &dyn PdfBackend,
        progress: &mut dyn FnMut(ProgressEvent),
    ) -> AttemptOutcome {
        let path = self.config.input_path.as_path();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            extract_with(backend, path, progress)
        }));

        match result {
            Ok(Ok(text)) if text.trim().is_empty() => AttemptOutcome::Empty,
            Ok(Ok(text)) => AttemptOutcome::Success(text),
            Ok(Err(BackendError::Unavailable(reason))) => AttemptOutcome::Unavailable(reason),
            Ok(Err(e)) => AttemptOutcome::Error(e.to_string()),
            Err(payload) => AttemptOutcome::Error(format!(
                "backend panicked: {}",
                panic_message(payload.as_ref())
            )),
        }
    }

    fn save(&self, extraction: Extraction, failed: Vec<Attempt>) -> RunOutcome {
        let output_path = self.config.output_path.clone();
        match std::fs::write(&output_path, extraction.text.as_bytes()) {
            Ok(()) => {
                tracing::debug!(
                    path = %output_path.display(),
                    chars = extraction.char_count,
                    "wrote extracted text"
                );
                RunOutcome::Saved {
                    extraction,
                    output_path,
                    failed,
                }
            }
            Err(e) => {
                tracing::error!(path = %output_path.display(), error = %e, "failed to write output");
                RunOutcome::SaveFailed {
                    extraction,
                    output_path,
                    reason: e.to_string(),
                    failed,
                }
            }
        }
    }
}

/// Open the document, report its page count, then aggregate its pages.
///
/// The document handle is dropped before returning, on every path.
fn extract_with(
    backend: &dyn PdfBackend,
    path: &Path,
    progress: &mut dyn FnMut(ProgressEvent),
) -> Result<String, BackendError> {
    let document = backend.open(path)?;
    let pages = document.page_count()?;
    tracing::debug!(backend = backend.name(), pages, "document opened");
    progress(ProgressEvent::PageCount {
        backend: backend.name().to_string(),
        pages,
    });
    assemble_document(document.as_ref(), pages)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
