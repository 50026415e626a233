// ============================================================
// Layer 4 — Format Dispatch
// ============================================================
// Chooses an adapter by file extension and turns every
// failure into an empty string, so a single corrupt file can
// never stop a batch.
//
//   .pdf   → PdfExtractor
//   .docx  → DocxExtractor
//   other  → nothing is read, result is ""
//
// Extension matching is case-insensitive ("BROCHURE.PDF").

use std::path::Path;

use crate::data::{docx::DocxExtractor, pdf::PdfExtractor};
use crate::domain::traits::{ExtractionError, TextExtractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf")  => Self::Pdf,
            Some("docx") => Self::Docx,
            _            => Self::Unsupported,
        }
    }
}

pub struct Extractor {
    pdf:  PdfExtractor,
    docx: DocxExtractor,
}

impl Extractor {
    pub fn new(max_pdf_pages: usize) -> Self {
        Self {
            pdf:  PdfExtractor::new(max_pdf_pages),
            docx: DocxExtractor::new(),
        }
    }

    /// Run the adapter for `format`, surfacing its error.
    pub fn try_extract(&self, path: &Path, format: DocumentFormat) -> Result<String, ExtractionError> {
        match format {
            DocumentFormat::Pdf         => self.pdf.extract(path),
            DocumentFormat::Docx        => self.docx.extract(path),
            DocumentFormat::Unsupported => Err(ExtractionError::UnsupportedFormat),
        }
    }

    /// Best-effort text of `path`. Failures are logged and yield "".
    pub fn extract_text(&self, path: &Path, format: DocumentFormat) -> String {
        match self.try_extract(path, format) {
            Ok(text) => text,
            Err(ExtractionError::UnsupportedFormat) => {
                tracing::debug!("No extractor for '{}'", path.display());
                String::new()
            }
            Err(e) => {
                tracing::warn!("Error reading {:?} '{}': {}", format, path.display(), e);
                String::new()
            }
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(crate::data::pdf::DEFAULT_MAX_PAGES)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pdf::tests::make_test_pdf;
    use std::fs;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.pdf")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path(Path::new("A.PDF")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path(Path::new("dataset/b.DocX")), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_path(Path::new("c.doc")), DocumentFormat::Unsupported);
        assert_eq!(DocumentFormat::from_path(Path::new("Unknown.xyz")), DocumentFormat::Unsupported);
        assert_eq!(DocumentFormat::from_path(Path::new("pdf")), DocumentFormat::Unsupported);
    }

    #[test]
    fn test_unsupported_is_empty_without_reading() {
        let ex = Extractor::default();
        // The file does not exist; an unsupported format never opens it
        let path = Path::new("/definitely/not/here.xyz");
        assert!(matches!(
            ex.try_extract(path, DocumentFormat::Unsupported),
            Err(ExtractionError::UnsupportedFormat)
        ));
        assert_eq!(ex.extract_text(path, DocumentFormat::Unsupported), "");
    }

    #[test]
    fn test_corrupt_pdf_yields_empty_string() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n1 0 obj << /Type /Catalog").unwrap();

        let ex = Extractor::default();
        assert_eq!(ex.extract_text(&path, DocumentFormat::Pdf), "");
    }

    #[test]
    fn test_missing_file_yields_empty_string() {
        let tmp = tempfile::tempdir().unwrap();
        let ex  = Extractor::default();
        assert_eq!(ex.extract_text(&tmp.path().join("gone.docx"), DocumentFormat::Docx), "");
    }

    #[test]
    fn test_dispatches_pdf() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Legend Brochure.PDF");
        fs::write(&path, make_test_pdf(&["Legend"])).unwrap();

        let ex   = Extractor::default();
        let text = ex.extract_text(&path, DocumentFormat::from_path(&path));
        assert!(text.contains("Legend"));
    }
}
