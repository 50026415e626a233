// ============================================================
// Layer 4 — DOCX Adapter
// ============================================================
// A .docx file is a ZIP archive of XML parts. docx-rs parses
// it into a typed tree:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// Body paragraphs are read in document order. Runs inside a
// paragraph are concatenated directly (they are fragments of
// one sentence); paragraphs are joined with newlines. Inside a
// run, a tab becomes '\t' and a line break '\n'. Runs nested in
// hyperlinks are read like top-level runs. Tables, images and
// headers are not read.

use std::{fs, path::Path};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::domain::traits::{ExtractionError, TextExtractor};

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse an in-memory .docx archive
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let docx = read_docx(bytes)
            .map_err(|e| ExtractionError::Docx(format!("{e:?}")))?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                let text = paragraph_text(para);

                // Blank paragraphs are section breaks and spacing
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = fs::read(path)?;
        self.extract_from_bytes(&bytes)
    }
}

/// Concatenate the text runs of one paragraph.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    push_children_text(&para.children, &mut out);
    out
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run};
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    fn make_test_docx(paragraphs: &[&[&str]]) -> Vec<u8> {
        let mut docx = Docx::new();
        for runs in paragraphs {
            let mut p = Paragraph::new();
            for text in *runs {
                p = p.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(p);
        }
        pack(docx)
    }

    #[test]
    fn test_paragraphs_in_order_newline_separated() {
        let bytes = make_test_docx(&[&["Affidavit of"], &["Possession"]]);
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();
        assert_eq!(text, "Affidavit of\nPossession");
    }

    #[test]
    fn test_runs_are_joined_without_separator() {
        let bytes = make_test_docx(&[&["Tathastu", "-II"]]);
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();
        assert_eq!(text, "Tathastu-II");
    }

    #[test]
    fn test_blank_paragraphs_are_dropped() {
        let bytes = make_test_docx(&[&["one"], &[], &["  "], &["two"]]);
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_tab_inside_run_separates_words() {
        let run   = Run::new().add_text("Carpet").add_tab().add_text("Area");
        let bytes = pack(Docx::new().add_paragraph(Paragraph::new().add_run(run)));
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();
        assert_eq!(text, "Carpet\tArea");
    }

    #[test]
    fn test_break_inside_run_separates_lines() {
        let run = Run::new()
            .add_text("Line one")
            .add_break(BreakType::TextWrapping)
            .add_text("Line two");
        let bytes = pack(Docx::new().add_paragraph(Paragraph::new().add_run(run)));
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();
        assert_eq!(text, "Line one\nLine two");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let link = Hyperlink::new("https://example.com", HyperlinkType::External)
            .add_run(Run::new().add_text("our site"));
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Visit"))
            .add_hyperlink(link)
            .add_run(Run::new().add_text("today"));
        let bytes = pack(Docx::new().add_paragraph(para));
        let text  = DocxExtractor::new().extract_from_bytes(&bytes).unwrap();

        assert!(text.contains("our site"), "got: {text}");
        assert!(text.starts_with("Visit"));
        assert!(text.ends_with("today"));
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let result = DocxExtractor::new().extract_from_bytes(b"plain text, not a docx");
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp    = tempfile::tempdir().unwrap();
        let result = DocxExtractor::new().extract(&tmp.path().join("gone.docx"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
