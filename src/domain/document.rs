// ============================================================
// Layer 3 — Document Record
// ============================================================
// One registry entry per file found in the source directory.
//
// The registry builder fills in the identity and
// classification fields. `excerpt` and `has_content` stay
// absent (and are left out of the JSON) until the enricher
// has run over the file.
//
// Field order here is the field order in the registry file:
//   filename, project, type, path, excerpt, has_content

use serde::{Deserialize, Serialize};

use crate::domain::classifier::classify;
use crate::domain::tags::{DocumentType, Project};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Name of the file on disk, unique within one build
    pub filename: String,

    pub project: Project,

    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// `<prefix>/<filename>`, resolvable by the file server
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_content: Option<bool>,
}

impl DocumentRecord {
    /// Classify `filename` and build an un-enriched record whose
    /// path is `prefix` joined to the filename with a forward slash.
    pub fn from_filename(filename: impl Into<String>, prefix: &str) -> Self {
        let filename = filename.into();
        let (project, doc_type) = classify(&filename);
        let prefix = prefix.trim_end_matches('/');
        let path = if prefix.is_empty() {
            filename.clone()
        } else {
            format!("{prefix}/{filename}")
        };

        Self {
            filename,
            project,
            doc_type,
            path,
            excerpt:     None,
            has_content: None,
        }
    }

    /// Overwrite any earlier enrichment with the given excerpt.
    pub fn set_content(&mut self, excerpt: String, has_content: bool) {
        self.excerpt     = Some(excerpt);
        self.has_content = Some(has_content);
    }

    /// The excerpt, or "" before enrichment
    pub fn excerpt(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    pub fn has_content(&self) -> bool {
        self.has_content.unwrap_or(false)
    }

    pub fn is_enriched(&self) -> bool {
        self.excerpt.is_some()
    }
}
