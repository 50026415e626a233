// ============================================================
// Layer 2 — EnrichUseCase
// ============================================================
// Adds a text excerpt to every record of an existing registry:
//
//   Step 1: Load the registry                  (Layer 6 - infra)
//   Step 2: For each record
//             resolve base_dir/path
//             extract text by extension        (Layer 4 - data)
//             normalise to one line            (Layer 4 - data)
//             set excerpt + has_content        (Layer 3 - domain)
//   Step 3: Write the full list back           (Layer 6 - infra)
//
// Records are independent of each other. A file that cannot
// be read simply ends up with an empty excerpt; the batch
// always finishes. Earlier excerpts are always overwritten,
// so re-running over unchanged files gives the same registry.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    extractor::{DocumentFormat, Extractor},
    pdf::DEFAULT_MAX_PAGES,
    preprocessor::Preprocessor,
};
use crate::domain::document::DocumentRecord;
use crate::infra::registry_store::RegistryStore;

// ─── Enrich Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// Registry produced by `build`
    pub registry_path: PathBuf,
    /// Directory that record paths are relative to
    pub base_dir:      PathBuf,
    /// Where to write the result; the input registry when None
    pub output_path:   Option<PathBuf>,
    /// PDF pages read per document
    pub max_pages:     usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("data/documents.json"),
            base_dir:      PathBuf::from("."),
            output_path:   None,
            max_pages:     DEFAULT_MAX_PAGES,
        }
    }
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub filename: String,
    /// Characters of normalised text, before truncation
    pub chars:    usize,
}

pub struct EnrichReport {
    pub records:     Vec<DocumentRecord>,
    pub outcomes:    Vec<FileOutcome>,
    pub output_path: PathBuf,
}

impl EnrichReport {
    pub fn with_content(&self) -> usize {
        self.records.iter().filter(|r| r.has_content()).count()
    }
}

// ─── EnrichUseCase ────────────────────────────────────────────────────────────
pub struct EnrichUseCase {
    config:       EnrichConfig,
    extractor:    Extractor,
    preprocessor: Preprocessor,
}

impl EnrichUseCase {
    pub fn new(config: EnrichConfig) -> Self {
        let extractor = Extractor::new(config.max_pages);
        Self { config, extractor, preprocessor: Preprocessor::new() }
    }

    pub fn execute(&self) -> Result<EnrichReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let records = RegistryStore::new(&cfg.registry_path).load()?;
        tracing::info!("Processing {} documents...", records.len());

        // ── Step 2: Extract + normalise ───────────────────────────────────────
        let (records, outcomes) = self.enrich_registry(records);

        // ── Step 3: Replace the registry ──────────────────────────────────────
        let output_path = cfg
            .output_path
            .clone()
            .unwrap_or_else(|| cfg.registry_path.clone());
        RegistryStore::new(&output_path).save(&records)?;
        tracing::info!("Wrote enriched registry to '{}'", output_path.display());

        Ok(EnrichReport { records, outcomes, output_path })
    }

    /// Set excerpt and has_content on every record.
    pub fn enrich_registry(
        &self,
        mut records: Vec<DocumentRecord>,
    ) -> (Vec<DocumentRecord>, Vec<FileOutcome>) {
        let outcomes = records
            .iter_mut()
            .map(|record| {
                let chars = self.enrich_record(record, &self.config.base_dir);
                FileOutcome { filename: record.filename.clone(), chars }
            })
            .collect();

        (records, outcomes)
    }

    /// Enrich one record in place, returning the normalised length.
    fn enrich_record(&self, record: &mut DocumentRecord, base_dir: &Path) -> usize {
        let file   = base_dir.join(&record.path);
        let format = DocumentFormat::from_path(&file);

        let raw        = self.extractor.extract_text(&file, format);
        let normalized = self.preprocessor.normalize(&raw);
        let chars      = normalized.chars().count();

        record.set_content(self.preprocessor.excerpt(&normalized), chars > 0);
        tracing::debug!("Processed {}: {} chars extracted.", record.filename, chars);
        chars
    }
}
