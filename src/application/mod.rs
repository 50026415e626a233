// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case is one job the binary can run. They only
// coordinate the other layers:
//
//   build   — scan folder, classify, write registry, report drift
//   enrich  — read registry, extract excerpts, write registry
//   list    — read registry, filter, sort
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No parsing of file formats (that's Layer 4)
//   - No JSON handling (that's Layer 6)

// The registry build + project reconciliation job
pub mod build_use_case;

// The excerpt enrichment job
pub mod enrich_use_case;

// Filtered, sorted views over an existing registry
pub mod list_use_case;
