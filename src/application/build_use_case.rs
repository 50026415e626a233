// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Produces the base registry from the document folder:
//
//   Step 1: List files in the source folder    (Layer 4 - data)
//   Step 2: Classify each filename              (Layer 3 - domain)
//   Step 3: Write the registry, replacing it    (Layer 6 - infra)
//   Step 4: Compare found projects against the
//           known-projects catalog              (Layer 6 - infra)
//
// Step 4 is a drift report only. If the catalog is missing or
// unreadable the report says so and the build still succeeds.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::PathBuf};

use crate::data::scanner::DirectoryScanner;
use crate::domain::{document::DocumentRecord, traits::DocumentSource};
use crate::infra::{known_projects::load_known_projects, registry_store::RegistryStore};

// ─── Build Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Folder holding the documents (not traversed recursively)
    pub source_dir:    PathBuf,
    /// Registry file to (re)write
    pub registry_path: PathBuf,
    /// Known-projects catalog used for the drift report
    pub projects_path: PathBuf,
    /// Prefix joined to each filename to form `path`
    pub path_prefix:   String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir:    PathBuf::from("dataset"),
            registry_path: PathBuf::from("data/documents.json"),
            projects_path: PathBuf::from("data/projects.json"),
            path_prefix:   "dataset".to_string(),
        }
    }
}

// ─── Reconciliation ───────────────────────────────────────────────────────────
/// Difference between the catalog and what the filenames produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReconciliation {
    pub known: BTreeSet<String>,
    /// Named projects found in the registry (sentinel excluded)
    pub found: BTreeSet<String>,
    /// In the catalog, but no document was classified into it
    pub without_documents: Vec<String>,
    /// Produced by classification, but missing from the catalog
    pub not_in_catalog: Vec<String>,
    /// Records left as Unknown Project
    pub unclassified: usize,
}

impl ProjectReconciliation {
    pub fn is_consistent(&self) -> bool {
        self.without_documents.is_empty() && self.not_in_catalog.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    Checked(ProjectReconciliation),
    /// The catalog could not be read; carries the reason
    Skipped(String),
}

/// Compare the projects present in `records` with `known`.
pub fn reconcile(records: &[DocumentRecord], known: BTreeSet<String>) -> ProjectReconciliation {
    let found: BTreeSet<String> = records
        .iter()
        .filter(|r| !r.project.is_unknown())
        .map(|r| r.project.to_string())
        .collect();

    let without_documents = known.difference(&found).cloned().collect();
    let not_in_catalog    = found.difference(&known).cloned().collect();
    let unclassified      = records.iter().filter(|r| r.project.is_unknown()).count();

    ProjectReconciliation { known, found, without_documents, not_in_catalog, unclassified }
}

/// Classify every file `source` lists into an un-enriched record.
pub fn build_registry(source: &impl DocumentSource, path_prefix: &str) -> Result<Vec<DocumentRecord>> {
    let records = source
        .list_files()?
        .into_iter()
        .map(|name| DocumentRecord::from_filename(name, path_prefix))
        .collect();
    Ok(records)
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
pub struct BuildReport {
    pub records:        Vec<DocumentRecord>,
    pub reconciliation: ReconciliationOutcome,
}

pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn execute(&self) -> Result<BuildReport> {
        let cfg = &self.config;

        // ── Steps 1 + 2: List and classify ────────────────────────────────────
        tracing::info!("Scanning '{}'", cfg.source_dir.display());
        let scanner = DirectoryScanner::new(&cfg.source_dir);
        let records = build_registry(&scanner, &cfg.path_prefix)?;

        for r in &records {
            tracing::debug!("{} → {} / {}", r.filename, r.project, r.doc_type);
        }

        // ── Step 3: Replace the registry file ─────────────────────────────────
        let store = RegistryStore::new(&cfg.registry_path);
        store.save(&records)?;
        tracing::info!("Wrote {} records to '{}'", records.len(), store.path().display());

        // ── Step 4: Drift report against the catalog ──────────────────────────
        let reconciliation = match load_known_projects(&cfg.projects_path) {
            Ok(known) => ReconciliationOutcome::Checked(reconcile(&records, known)),
            Err(e) => {
                tracing::warn!("Skipping project reconciliation: {:#}", e);
                ReconciliationOutcome::Skipped(format!("{e:#}"))
            }
        };

        Ok(BuildReport { records, reconciliation })
    }
}
