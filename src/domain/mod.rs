// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types and functions describing what a registry
// entry IS and how a filename is sorted into categories.
//
// Rules for this layer:
//   - NO file I/O
//   - NO parsing libraries
//   - Only plain structs, enums, rule tables and traits
//
// Everything here is testable with string literals alone.

// The closed Project / DocumentType vocabularies
pub mod tags;

// Ordered keyword rule tables and the classify_* functions
pub mod classifier;

// One registry entry
pub mod document;

// Core abstractions (traits) that other layers implement
pub mod traits;
