// ============================================================
// Layer 4 — PDF Adapter
// ============================================================
// Reads the text layer of the first few pages of a PDF with
// lopdf.
//
//   - The whole file is parsed, but only the content streams of
//     the first `max_pages` pages (default 3) are decoded
//   - Page texts are joined with newlines
//   - A page with no text layer (a scan) contributes nothing
//   - A page whose content stream fails to decode is skipped
//
// The parser can panic on malformed font tables. The whole
// parse runs inside catch_unwind and a panic becomes
// ExtractionError::Panicked.

use std::{fs, panic, path::Path};
use lopdf::Document;

use crate::domain::traits::{ExtractionError, TextExtractor};

/// Pages read per document unless configured otherwise
pub const DEFAULT_MAX_PAGES: usize = 3;

pub struct PdfExtractor {
    max_pages: usize,
}

impl PdfExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Parse an in-memory PDF
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let max_pages = self.max_pages;
        catch_parser_panic(|| read_leading_pages(bytes, max_pages))
    }
}

/// Run `parse`, turning a panic into `ExtractionError::Panicked`.
fn catch_parser_panic<F>(parse: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + panic::UnwindSafe,
{
    match panic::catch_unwind(parse) {
        Ok(result) => result,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(ExtractionError::Panicked(reason))
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES)
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = fs::read(path)?;
        self.extract_from_bytes(&bytes)
    }
}

fn read_leading_pages(bytes: &[u8], max_pages: usize) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();

    // get_pages() is keyed by 1-based page number, so iteration is in page order
    for (&page_number, _) in doc.get_pages().iter().take(max_pages) {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => {
                if !page_text.trim().is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                }
            }
            Err(e) => {
                tracing::debug!("No text on page {}: {}", page_number, e);
            }
        }
    }

    Ok(text.trim().to_string())
}
