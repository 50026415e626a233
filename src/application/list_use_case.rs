// ============================================================
// Layer 2 — ListUseCase
// ============================================================
// Read-only view of the registry, filtered the way the
// project pages of the site show it:
//
//   - by project, where Tathastu I and II also list the
//     shared Sector 104 paperwork (see Project::includes)
//   - by document type
//   - sorted by type name, then filename

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::{
    document::DocumentRecord,
    tags::{DocumentType, Project},
};
use crate::infra::registry_store::RegistryStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuery {
    pub project:  Option<Project>,
    pub doc_type: Option<DocumentType>,
}

impl ListQuery {
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        self.project.map_or(true, |p| p.includes(record.project))
            && self.doc_type.map_or(true, |t| t == record.doc_type)
    }
}

/// Keep the records `query` selects, in display order.
pub fn filter_records(records: Vec<DocumentRecord>, query: &ListQuery) -> Vec<DocumentRecord> {
    let mut selected: Vec<DocumentRecord> =
        records.into_iter().filter(|r| query.matches(r)).collect();

    selected.sort_by(|a, b| {
        a.doc_type
            .as_str()
            .cmp(b.doc_type.as_str())
            .then_with(|| a.filename.cmp(&b.filename))
    });
    selected
}

pub struct ListUseCase {
    registry_path: PathBuf,
}

impl ListUseCase {
    pub fn new(registry_path: impl Into<PathBuf>) -> Self {
        Self { registry_path: registry_path.into() }
    }

    pub fn execute(&self, query: &ListQuery) -> Result<Vec<DocumentRecord>> {
        let records  = RegistryStore::new(&self.registry_path).load()?;
        let selected = filter_records(records, query);
        tracing::debug!("{} records match {:?}", selected.len(), query);
        Ok(selected)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<DocumentRecord> {
        [
            "Tathastu I Site Plan.pdf",
            "Tathastu I Brochure.pdf",
            "Sector 104 Affidavit.docx",
            "Tathastu II Brochure.pdf",
            "Legend Brochure.pdf",
            "Tower 1.pdf",
        ]
        .iter()
        .map(|name| DocumentRecord::from_filename(*name, "dataset"))
        .collect()
    }

    fn names(records: &[DocumentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.filename.as_str()).collect()
    }

    #[test]
    fn test_project_view_includes_shared_sector_104() {
        let query = ListQuery { project: Some(Project::TathastuI), doc_type: None };
        let out   = filter_records(registry(), &query);
        assert_eq!(
            names(&out),
            vec!["Tathastu I Brochure.pdf", "Sector 104 Affidavit.docx", "Tathastu I Site Plan.pdf"]
        );
    }

    #[test]
    fn test_type_filter() {
        let query = ListQuery { project: None, doc_type: Some(DocumentType::Brochure) };
        let out   = filter_records(registry(), &query);
        assert_eq!(
            names(&out),
            vec!["Legend Brochure.pdf", "Tathastu I Brochure.pdf", "Tathastu II Brochure.pdf"]
        );
    }

    #[test]
    fn test_combined_filters() {
        let query = ListQuery {
            project:  Some(Project::TathastuII),
            doc_type: Some(DocumentType::LegalDocument),
        };
        let out = filter_records(registry(), &query);
        assert_eq!(names(&out), vec!["Sector 104 Affidavit.docx"]);
    }

    #[test]
    fn test_unknown_project_view() {
        let query = ListQuery { project: Some(Project::Unknown), doc_type: None };
        let out   = filter_records(registry(), &query);
        assert_eq!(names(&out), vec!["Tower 1.pdf"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let out = filter_records(registry(), &ListQuery::default());
        assert_eq!(out.len(), 6);
    }
}
