//! Resume text extraction from uploaded PDFs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Could not read PDF: {0}")]
    Extraction(String),

    #[error("No extractable text found in PDF")]
    NoText,
}

/// Turns uploaded resume bytes into plain text.
///
/// Implementations are CPU-bound and called from `spawn_blocking`.
pub trait ResumeTextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PdfError>;
}

/// Default extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl ResumeTextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PdfError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::Extraction(e.to_string()))?;
        normalize_text(&text)
    }
}

/// Collapses runs of blank lines and trailing spaces left by page layout.
/// Fails with `NoText` for scanned or image-only documents.
pub fn normalize_text(raw: &str) -> Result<String, PdfError> {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0;

    for line in raw.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    let text = out.trim();
    if text.is_empty() {
        Err(PdfError::NoText)
    } else {
        Ok(text.to_string())
    }
}

/// True when the uploaded filename carries a `.pdf` extension.
pub fn has_pdf_extension(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
