// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Turns extracted text into the one-line snippet the UI shows.
//
// Text pulled out of PDFs and Word files is full of:
//   - Non-breaking spaces (U+00A0) from Word formatting
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Byte order marks and stray control characters
//   - Line breaks at every visual line of a brochure
//
// Normalisation (applied in order):
//   1. Map those characters to a plain space
//   2. Collapse every whitespace run, newlines included,
//      into a single space
//   3. Trim both ends
//
// Step 1 goes further than whitespace collapsing: text made
// only of zero-width spaces, BOMs or control characters
// normalises to "" and so counts as having no content.
//
// Excerpts are then cut to EXCERPT_LIMIT characters with
// TRUNCATION_MARKER appended. Lengths count chars, not bytes,
// so a cut never lands inside a multi-byte character.

/// Maximum characters kept from the normalised text
pub const EXCERPT_LIMIT: usize = 1000;

/// Appended when the text was longer than EXCERPT_LIMIT
pub const TRUNCATION_MARKER: &str = "...";

pub struct Preprocessor {
    excerpt_limit: usize,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::with_limit(EXCERPT_LIMIT)
    }

    /// A preprocessor whose excerpts keep `excerpt_limit` chars
    pub fn with_limit(excerpt_limit: usize) -> Self {
        Self { excerpt_limit }
    }

    /// Collapse `text` to a single trimmed line.
    pub fn normalize(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ───────────────────────────
        let mapped: String = text
            .chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect();

        // ── Steps 2 + 3: Collapse whitespace runs and trim ────────────────────
        mapped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Cut `normalized` to the excerpt limit, marking the cut.
    pub fn excerpt(&self, normalized: &str) -> String {
        match normalized.char_indices().nth(self.excerpt_limit) {
            // There is a char past the limit, so the text is too long
            Some((cut, _)) => format!("{}{}", &normalized[..cut], TRUNCATION_MARKER),
            None => normalized.to_string(),
        }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
