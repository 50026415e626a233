// ============================================================
// Layer 3 — Categorical Tags
// ============================================================
// The two closed vocabularies a document is sorted into:
//
//   Project       — which development the file belongs to
//   DocumentType  — what kind of document it is
//
// Each vocabulary carries its own sentinel (UnknownProject,
// Other) so classification always has somewhere to land.
//
// On disk both are written as their human-readable display
// names ("Tathastu II", "Floor Plan") because the registry is
// read directly by the front-end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Project ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Project {
    #[serde(rename = "Tathastu I")]
    TathastuI,
    #[serde(rename = "Tathastu II")]
    TathastuII,
    #[serde(rename = "Advitiya Heights")]
    AdvitiyaHeights,
    #[serde(rename = "Legend III")]
    LegendIII,
    #[serde(rename = "Sector 104 Development")]
    Sector104Development,
    #[serde(rename = "Unknown Project")]
    Unknown,
}

impl Project {
    /// Every variant, sentinel last
    pub const ALL: [Project; 6] = [
        Project::TathastuI,
        Project::TathastuII,
        Project::AdvitiyaHeights,
        Project::LegendIII,
        Project::Sector104Development,
        Project::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TathastuI            => "Tathastu I",
            Self::TathastuII           => "Tathastu II",
            Self::AdvitiyaHeights      => "Advitiya Heights",
            Self::LegendIII            => "Legend III",
            Self::Sector104Development => "Sector 104 Development",
            Self::Unknown              => "Unknown Project",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether a record classified as `other` belongs in this
    /// project's document view.
    ///
    /// Sector 104 paperwork covers the land both Tathastu towers
    /// stand on, so it is listed under either of them as well as
    /// under its own name.
    pub fn includes(&self, other: Project) -> bool {
        *self == other
            || (other == Project::Sector104Development
                && matches!(self, Self::TathastuI | Self::TathastuII))
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Project {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Project::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown project '{wanted}'"))
    }
}

// ─── DocumentType ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    Brochure,
    #[serde(rename = "Floor Plan")]
    FloorPlan,
    #[serde(rename = "Site Plan")]
    SitePlan,
    #[serde(rename = "Carpet Area")]
    CarpetArea,
    Elevation,
    #[serde(rename = "Legal Document")]
    LegalDocument,
    Advertisement,
    #[serde(rename = "Technical Drawing")]
    TechnicalDrawing,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 9] = [
        DocumentType::Brochure,
        DocumentType::FloorPlan,
        DocumentType::SitePlan,
        DocumentType::CarpetArea,
        DocumentType::Elevation,
        DocumentType::LegalDocument,
        DocumentType::Advertisement,
        DocumentType::TechnicalDrawing,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brochure         => "Brochure",
            Self::FloorPlan        => "Floor Plan",
            Self::SitePlan         => "Site Plan",
            Self::CarpetArea       => "Carpet Area",
            Self::Elevation        => "Elevation",
            Self::LegalDocument    => "Legal Document",
            Self::Advertisement    => "Advertisement",
            Self::TechnicalDrawing => "Technical Drawing",
            Self::Other            => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown document type '{wanted}'"))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Project::Sector104Development).unwrap();
        assert_eq!(json, "\"Sector 104 Development\"");

        let json = serde_json::to_string(&DocumentType::FloorPlan).unwrap();
        assert_eq!(json, "\"Floor Plan\"");
    }

    #[test]
    fn test_display_matches_serde_name() {
        for p in Project::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{p}\""));
        }
        for t in DocumentType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{t}\""));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("tathastu ii".parse::<Project>(), Ok(Project::TathastuII));
        assert_eq!(" LEGEND III ".parse::<Project>(), Ok(Project::LegendIII));
        assert_eq!("site plan".parse::<DocumentType>(), Ok(DocumentType::SitePlan));
        assert!("Tathastu III".parse::<Project>().is_err());
        assert!("memo".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_sector_104_shared_with_tathastu() {
        assert!(Project::TathastuI.includes(Project::Sector104Development));
        assert!(Project::TathastuII.includes(Project::Sector104Development));
        assert!(Project::Sector104Development.includes(Project::Sector104Development));
        assert!(!Project::AdvitiyaHeights.includes(Project::Sector104Development));
        assert!(!Project::TathastuI.includes(Project::TathastuII));
    }
}
