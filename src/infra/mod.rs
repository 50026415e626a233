// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The two JSON files the jobs exchange:
//
//   registry_store.rs  — the document registry itself.
//                        Written whole by `build`, read and
//                        rewritten whole by `enrich`, read by
//                        `list`.
//
//   known_projects.rs  — the hand-maintained project catalog.
//                        Read only, and only for the drift
//                        report at the end of `build`.

/// Registry JSON load/save
pub mod registry_store;

/// projects.json reader
pub mod known_projects;
