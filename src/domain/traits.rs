// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to these traits:
//
//   DocumentSource → where filenames come from
//                    (DirectoryScanner in Layer 4)
//   TextExtractor  → turns one file into plain text
//                    (PdfExtractor, DocxExtractor in Layer 4)
//
// ExtractionError lives next to TextExtractor because it is
// part of that contract. It never leaves the extraction
// boundary: the dispatcher logs it and substitutes "".

use anyhow::Result;
use std::path::Path;
use thiserror::Error;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can enumerate the files to put in a registry.
pub trait DocumentSource {
    /// Names of every file currently in the source, in a stable order.
    fn list_files(&self) -> Result<Vec<String>>;
}

// ─── TextExtractor ────────────────────────────────────────────────────────────
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("DOCX parsing failed: {0}")]
    Docx(String),

    #[error("parser panicked: {0}")]
    Panicked(String),

    #[error("Unsupported format for extraction")]
    UnsupportedFormat,
}

/// One format adapter.
pub trait TextExtractor {
    /// Read `path` and return its plain text, newline-separated
    /// by page or paragraph. Empty text is a success.
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
