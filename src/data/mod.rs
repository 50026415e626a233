// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything that touches document files on disk.
//
//   document folder
//       │
//       ▼
//   DirectoryScanner  → filenames for the registry builder
//
//   one registry entry
//       │
//       ▼
//   Extractor         → picks PdfExtractor / DocxExtractor
//       │               by extension, "" on any failure
//       ▼
//   Preprocessor      → one-line normalised text + excerpt
//
// Each module is responsible for exactly one step.

/// Lists files in the source directory
pub mod scanner;

/// Extension-based dispatch to the format adapters
pub mod extractor;

/// lopdf-based PDF text adapter
pub mod pdf;

/// docx-rs based Word adapter
pub mod docx;

/// Whitespace normalisation and excerpt truncation
pub mod preprocessor;
