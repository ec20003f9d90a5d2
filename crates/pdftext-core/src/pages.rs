//! Joining per-page text into the marked-up output format.

use crate::backend::{BackendError, PdfDocument};

/// Separator line emitted before each non-blank page, `n` is 1-based.
pub fn page_marker(n: usize) -> String {
    format!("--- PAGE {} ---", n)
}

/// Append one page block: a blank line, the marker, the raw page text, newline.
fn push_page_block(out: &mut String, page_number: usize, page_text: &str) {
    out.push('\n');
    out.push_str(&page_marker(page_number));
    out.push('\n');
    out.push_str(page_text);
    out.push('\n');
}

/// Aggregate the text of every page of an open document.
///
/// Stops at the first page that fails; partial output is discarded.
pub fn assemble_document(
    doc: &dyn PdfDocument,
    page_count: usize,
) -> Result<String, BackendError> {
    let mut out = String::new();
    for index in 0..page_count {
        let text = doc.page_text(index)?;
        if text.trim().is_empty() {
            tracing::trace!(page = index + 1, "skipping blank page");
            continue;
        }
        push_page_block(&mut out, index + 1, &text);
    }
    Ok(out)
}
