// ============================================================
// Layer 6 — Registry Store
// ============================================================
// Reads and writes the registry file: a pretty-printed JSON
// array of DocumentRecord objects.
//
// The file is a derived artifact. Every save replaces it
// whole; nothing is merged with what was there before.
//
// File layout:
//   data/
//     documents.json   ← written by `build`, rewritten by `enrich`
//     projects.json    ← maintained by hand, read by `build`

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::document::DocumentRecord;

pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the registry file with `records`.
    /// Creates the parent directory if needed.
    pub fn save(&self, records: &[DocumentRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create directory '{}'", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write registry to '{}'", self.path.display()))?;

        tracing::debug!("Saved {} records to '{}'", records.len(), self.path.display());
        Ok(())
    }

    /// Read every record from the registry file.
    pub fn load(&self) -> Result<Vec<DocumentRecord>> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read registry from '{}'. \
                 Make sure you have run 'build' first.",
                self.path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed registry '{}'", self.path.display()))
    }
}
