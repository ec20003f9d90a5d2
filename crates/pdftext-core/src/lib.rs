use std::path::PathBuf;

pub mod backend;
pub mod config_file;
pub mod orchestrator;
pub mod pages;

#[cfg(test)]
mod mock;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend, PdfDocument, PreloadedDocument, UnavailableBackend};
pub use orchestrator::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ExtractConfig, Orchestrator};
pub use pages::{assemble_document, page_marker};

/// Outcome of trying a single backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Non-blank aggregated text.
    Success(String),
    /// The backend ran but produced only whitespace.
    Empty,
    /// The backend could not be loaded or was disabled.
    Unavailable(String),
    /// Opening or reading the document failed (or the library panicked).
    Error(String),
}

/// A failed backend attempt, kept for the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub backend: String,
    pub outcome: AttemptOutcome,
}

/// Text produced by the winning backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub backend: String,
    pub text: String,
    /// Number of Unicode scalar values in `text`.
    pub char_count: usize,
}

impl Extraction {
    pub fn new(backend: impl Into<String>, text: String) -> Self {
        let char_count = text.chars().count();
        Self {
            backend: backend.into(),
            text,
            char_count,
        }
    }
}

/// Final result of an orchestrator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Text extracted and written to `output_path`.
    Saved {
        extraction: Extraction,
        output_path: PathBuf,
        failed: Vec<Attempt>,
    },
    /// Text extracted but the output file could not be written.
    SaveFailed {
        extraction: Extraction,
        output_path: PathBuf,
        reason: String,
        failed: Vec<Attempt>,
    },
    /// Every backend failed. `input_size` is set when the input exists.
    AllFailed {
        failed: Vec<Attempt>,
        input_size: Option<u64>,
    },
}

impl RunOutcome {
    pub fn extraction(&self) -> Option<&Extraction> {
        match self {
            RunOutcome::Saved { extraction, .. } | RunOutcome::SaveFailed { extraction, .. } => {
                Some(extraction)
            }
            RunOutcome::AllFailed { .. } => None,
        }
    }

    pub fn failed_attempts(&self) -> &[Attempt] {
        match self {
            RunOutcome::Saved { failed, .. }
            | RunOutcome::SaveFailed { failed, .. }
            | RunOutcome::AllFailed { failed, .. } => failed,
        }
    }
}

/// Progress events emitted while the fallback chain runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Trying {
        backend: String,
    },
    /// The document opened; reported before any page text is read.
    PageCount {
        backend: String,
        pages: usize,
    },
    Succeeded {
        backend: String,
    },
    /// The backend was skipped. `outcome` is never `Success`.
    Failed {
        backend: String,
        outcome: AttemptOutcome,
    },
}
