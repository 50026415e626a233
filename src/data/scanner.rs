// ============================================================
// Layer 4 — Directory Scanner
// ============================================================
// Lists the files directly inside the document folder.
//
//   - Subdirectories are skipped, never traversed
//   - Names that are not valid UTF-8 are skipped with a
//     warning, since they cannot be written as JSON keys
//   - Output is sorted so two builds over the same folder
//     produce identical registries

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::traits::DocumentSource;

pub struct DirectoryScanner {
    dir: PathBuf,
}

impl DirectoryScanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for DirectoryScanner {
    fn list_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list an entry of '{}'", self.dir.display()))?;
            let path  = entry.path();

            // metadata() follows symlinks, so a link to a file counts as a file
            if path.is_dir() {
                tracing::debug!("Skipping subdirectory '{}'", path.display());
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 filename {:?}", raw);
                }
            }
        }

        names.sort();
        tracing::debug!("Found {} files in '{}'", names.len(), self.dir.display());
        Ok(names)
    }
}
