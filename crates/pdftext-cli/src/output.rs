use std::io::Write;

use owo_colors::OwoColorize;
use pdftext_core::{AttemptOutcome, ProgressEvent, RunOutcome};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

const FRAME_WIDTH: usize = 50;

pub fn print_header(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Attempting to extract PDF text...")
}

/// Print a real-time progress event.
pub fn print_progress(
    w: &mut dyn Write,
    event: &ProgressEvent,
    color: ColorMode,
) -> std::io::Result<()> {
    match event {
        ProgressEvent::Trying { backend } => {
            writeln!(w)?;
            writeln!(w, "Trying {}...", backend)?;
        }
        ProgressEvent::PageCount { pages, .. } => {
            writeln!(w, "Number of pages: {}", pages)?;
        }
        ProgressEvent::Succeeded { backend } => {
            let msg = format!("Success with {}!", backend);
            if color.enabled() {
                writeln!(w, "{}", msg.green())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
        ProgressEvent::Failed { backend, outcome } => {
            match outcome {
                AttemptOutcome::Unavailable(reason) => {
                    writeln!(w, "{} not available ({})", backend, reason)?;
                }
                AttemptOutcome::Error(message) => {
                    writeln!(w, "{} error: {}", backend, message)?;
                }
                AttemptOutcome::Empty | AttemptOutcome::Success(_) => {}
            }
            let msg = format!("{} failed or returned empty text", backend);
            if color.enabled() {
                writeln!(w, "{}", msg.yellow())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
    }
    Ok(())
}

/// Print the final result: the framed text and where it went, or the
/// all-failed notice with the input size.
pub fn print_outcome(
    w: &mut dyn Write,
    outcome: &RunOutcome,
    color: ColorMode,
    quiet: bool,
) -> std::io::Result<()> {
    if let Some(extraction) = outcome.extraction() {
        writeln!(w)?;
        writeln!(w, "Extracted text ({} characters):", extraction.char_count)?;
        if !quiet {
            let sep = "=".repeat(FRAME_WIDTH);
            writeln!(w, "{}", sep)?;
            writeln!(w, "{}", extraction.text)?;
            writeln!(w, "{}", sep)?;
        }
    }

    match outcome {
        RunOutcome::Saved { output_path, .. } => {
            writeln!(w)?;
            writeln!(w, "Text saved to {}", output_path.display())?;
        }
        RunOutcome::SaveFailed {
            output_path,
            reason,
            ..
        } => {
            let msg = format!("Failed to save text to {}: {}", output_path.display(), reason);
            writeln!(w)?;
            if color.enabled() {
                writeln!(w, "{}", msg.red())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
        RunOutcome::AllFailed { input_size, .. } => {
            let msg = "Failed to extract text with all methods";
            writeln!(w)?;
            if color.enabled() {
                writeln!(w, "{}", msg.bold().red())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
            if let Some(size) = input_size {
                writeln!(w, "PDF file size: {} bytes", size)?;
            }
        }
    }
    Ok(())
}
