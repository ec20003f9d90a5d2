use pdftext_core::{PdfBackend, UnavailableBackend};

/// Backend names in the order they are tried.
pub const BACKEND_ORDER: [&str; 3] = ["lopdf", "pdf-extract", "MuPDF"];

/// Build the fixed fallback chain.
///
/// Every slot is always present: a backend that is disabled (matched
/// case-insensitively against `disabled`) or not compiled into this build is
/// replaced by an [`UnavailableBackend`] with the same name.
pub fn build_backends(disabled: &[String]) -> Vec<Box<dyn PdfBackend>> {
    for name in disabled {
        if !BACKEND_ORDER.iter().any(|b| b.eq_ignore_ascii_case(name)) {
            tracing::warn!(backend = %name, "ignoring unknown backend in disabled list");
        }
    }

    BACKEND_ORDER
        .iter()
        .map(|&name| {
            if disabled.iter().any(|d| d.eq_ignore_ascii_case(name)) {
                Box::new(UnavailableBackend::new(name, "disabled by configuration"))
                    as Box<dyn PdfBackend>
            } else {
                compiled_backend(name)
            }
        })
        .collect()
}

fn compiled_backend(name: &str) -> Box<dyn PdfBackend> {
    match name {
        #[cfg(feature = "lopdf")]
        "lopdf" => Box::new(pdftext_lopdf::LopdfBackend::new()),
        #[cfg(feature = "pdf-extract")]
        "pdf-extract" => Box::new(pdftext_pdf_extract::PdfExtractBackend::new()),
        #[cfg(feature = "mupdf")]
        "MuPDF" => Box::new(pdftext_mupdf::MupdfBackend::new()),
        _ => Box::new(UnavailableBackend::new(
            name,
            "support not compiled into this build",
        )),
    }
}
