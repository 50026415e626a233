// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// The four subcommands and their flags. Defaults match the
// folder layout the site is served from:
//
//   ./dataset/              the documents
//   ./data/documents.json   the registry
//   ./data/projects.json    the project catalog

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{build_use_case::BuildConfig, enrich_use_case::EnrichConfig};
use crate::data::pdf::DEFAULT_MAX_PAGES;
use crate::domain::tags::{DocumentType, Project};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the document folder and rewrite the registry
    Build(BuildArgs),

    /// Add text excerpts to every record of the registry
    Enrich(EnrichArgs),

    /// Show registry entries, optionally filtered
    List(ListArgs),

    /// Print the project and type a filename would get
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Folder containing the documents (subfolders are ignored)
    #[arg(long, default_value = "dataset")]
    pub source_dir: PathBuf,

    /// Registry file to write
    #[arg(long, default_value = "data/documents.json")]
    pub registry: PathBuf,

    /// Known-projects catalog used for the drift report
    #[arg(long, default_value = "data/projects.json")]
    pub projects: PathBuf,

    /// Prefix put in front of each filename in `path`
    #[arg(long, default_value = "dataset")]
    pub path_prefix: String,
}

impl From<BuildArgs> for BuildConfig {
    fn from(a: BuildArgs) -> Self {
        BuildConfig {
            source_dir:    a.source_dir,
            registry_path: a.registry,
            projects_path: a.projects,
            path_prefix:   a.path_prefix,
        }
    }
}

#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// Registry produced by `build`
    #[arg(long, default_value = "data/documents.json")]
    pub registry: PathBuf,

    /// Directory that record paths are relative to
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Write here instead of overwriting the registry
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// PDF pages read per document
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,
}

impl From<EnrichArgs> for EnrichConfig {
    fn from(a: EnrichArgs) -> Self {
        EnrichConfig {
            registry_path: a.registry,
            base_dir:      a.base_dir,
            output_path:   a.output,
            max_pages:     a.max_pages,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value = "data/documents.json")]
    pub registry: PathBuf,

    /// Only this project, e.g. "Tathastu II"
    #[arg(long)]
    pub project: Option<Project>,

    /// Only this document type, e.g. "Floor Plan"
    #[arg(long = "type")]
    pub doc_type: Option<DocumentType>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// One or more filenames
    #[arg(required = true)]
    pub filenames: Vec<String>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["doc-registry", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                let cfg: BuildConfig = args.into();
                assert_eq!(cfg.source_dir, PathBuf::from("dataset"));
                assert_eq!(cfg.registry_path, PathBuf::from("data/documents.json"));
                assert_eq!(cfg.path_prefix, "dataset");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_enrich_flags() {
        let cli = Cli::try_parse_from([
            "doc-registry", "enrich", "--max-pages", "5", "--output", "out.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Enrich(args) => {
                let cfg: EnrichConfig = args.into();
                assert_eq!(cfg.max_pages, 5);
                assert_eq!(cfg.output_path, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_list_parses_tags() {
        let cli = Cli::try_parse_from([
            "doc-registry", "list", "--project", "tathastu ii", "--type", "Floor Plan",
        ])
        .unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.project, Some(Project::TathastuII));
                assert_eq!(args.doc_type, Some(DocumentType::FloorPlan));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_list_rejects_unknown_project() {
        let result = Cli::try_parse_from(["doc-registry", "list", "--project", "Nowhere"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_requires_a_name() {
        assert!(Cli::try_parse_from(["doc-registry", "classify"]).is_err());
    }
}
