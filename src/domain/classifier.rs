// ============================================================
// Layer 3 — Filename Classifier
// ============================================================
// Turns a free-text, inconsistently cased filename into a
// (Project, DocumentType) pair.
//
// Each vocabulary has its own ordered rule table. A rule is
// a list of keywords of which at least one must appear, plus
// a list of keywords of which none may appear. Tables are
// scanned top to bottom and the FIRST matching rule wins;
// when nothing matches the sentinel is returned.
//
// Order is significant. "tathastu i" is a prefix of
// "tathastu ii", so the Tathastu I rule refuses any name
// containing "ii" and must sit above the Tathastu II rule.
//
// Example:
//   "Tathastu II Brochure.pdf"  → (Tathastu II,     Brochure)
//   "Tower 1.pdf"               → (Unknown Project, Floor Plan)
//
// The second example is a known gap: tower floor plans are
// often uploaded without a project name and stay unassigned.

use crate::domain::tags::{DocumentType, Project};

/// One entry of an ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    /// At least one of these must be a substring of the name
    pub any_of: &'static [&'static str],
    /// None of these may be a substring of the name
    pub none_of: &'static [&'static str],
    pub result: T,
}

impl<T: Copy> Rule<T> {
    /// `lowered` must already be lower-cased
    pub fn matches(&self, lowered: &str) -> bool {
        self.any_of.iter().any(|k| lowered.contains(k))
            && !self.none_of.iter().any(|k| lowered.contains(k))
    }
}

pub const PROJECT_RULES: &[Rule<Project>] = &[
    Rule { any_of: &["tathastu i"],            none_of: &["ii"], result: Project::TathastuI },
    Rule { any_of: &["tathastu ii"],           none_of: &[],     result: Project::TathastuII },
    Rule { any_of: &["advitiya", "advitya"],   none_of: &[],     result: Project::AdvitiyaHeights },
    Rule { any_of: &["legend"],                none_of: &[],     result: Project::LegendIII },
    Rule { any_of: &["sector 104"],            none_of: &[],     result: Project::Sector104Development },
];

pub const TYPE_RULES: &[Rule<DocumentType>] = &[
    Rule { any_of: &["brochure", "braucher"],  none_of: &[], result: DocumentType::Brochure },
    Rule { any_of: &["floor plan", "tower"],   none_of: &[], result: DocumentType::FloorPlan },
    Rule { any_of: &["site plan", "layout"],   none_of: &[], result: DocumentType::SitePlan },
    Rule { any_of: &["carpet area"],           none_of: &[], result: DocumentType::CarpetArea },
    Rule { any_of: &["elevation"],             none_of: &[], result: DocumentType::Elevation },
    Rule { any_of: &["affidavit"],             none_of: &[], result: DocumentType::LegalDocument },
    Rule { any_of: &["newspaper"],             none_of: &[], result: DocumentType::Advertisement },
    Rule { any_of: &["drawing"],               none_of: &[], result: DocumentType::TechnicalDrawing },
];

/// Return the result of the first rule matching `name`, or `fallback`.
pub fn first_match<T: Copy>(rules: &[Rule<T>], name: &str, fallback: T) -> T {
    let lowered = name.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.result)
        .unwrap_or(fallback)
}

pub fn classify_project(filename: &str) -> Project {
    first_match(PROJECT_RULES, filename, Project::Unknown)
}

pub fn classify_type(filename: &str) -> DocumentType {
    first_match(TYPE_RULES, filename, DocumentType::Other)
}

/// Both classifications at once
pub fn classify(filename: &str) -> (Project, DocumentType) {
    (classify_project(filename), classify_type(filename))
}
