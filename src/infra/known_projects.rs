// ============================================================
// Layer 6 — Known Projects Catalog
// ============================================================
// The hand-maintained list of projects the site knows about.
// Only the `name` of each entry matters here; every other
// field (location, builder, coordinates...) is ignored.
//
// Example projects.json:
//   [
//     { "name": "Tathastu I", "location": "Sector 104" },
//     { "name": "Legend III" }
//   ]

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeSet, fs, path::Path};

#[derive(Debug, Clone, Deserialize)]
pub struct KnownProject {
    pub name: String,
}

/// Read the distinct project names listed in `path`.
pub fn load_known_projects(path: &Path) -> Result<BTreeSet<String>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read projects file '{}'", path.display()))?;

    let projects: Vec<KnownProject> = serde_json::from_str(&json)
        .with_context(|| format!("Malformed projects file '{}'", path.display()))?;

    Ok(projects.into_iter().map(|p| p.name).collect())
}
