// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands the work to a use case,
// and prints the human-readable summary. stdout is the only
// status channel of the batch jobs; diagnostics go through
// tracing on stderr.
//
// Commands:
//   1. `build`    — classify the document folder into a registry
//   2. `enrich`   — add text excerpts to the registry
//   3. `list`     — show registry entries by project / type
//   4. `classify` — dry-run the filename rules

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, ClassifyArgs, Commands, EnrichArgs, ListArgs};

use crate::application::build_use_case::{BuildUseCase, ReconciliationOutcome};
use crate::application::enrich_use_case::EnrichUseCase;
use crate::application::list_use_case::{ListQuery, ListUseCase};
use crate::data::preprocessor::Preprocessor;
use crate::domain::classifier::classify;

/// Characters of excerpt shown under each `list` entry
const PREVIEW_CHARS: usize = 200;

#[derive(Parser, Debug)]
#[command(
    name = "doc-registry",
    version,
    about = "Classify project documents by filename and enrich them with text excerpts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args)    => run_build(args),
            Commands::Enrich(args)   => run_enrich(args),
            Commands::List(args)     => run_list(args),
            Commands::Classify(args) => run_classify(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let use_case = BuildUseCase::new(args.into());
    let report   = use_case.execute()?;

    println!(
        "Generated {} with {} entries.",
        use_case.config().registry_path.display(),
        report.records.len()
    );

    match &report.reconciliation {
        ReconciliationOutcome::Checked(rec) => {
            println!("Existing Projects: {}", join(rec.known.iter()));
            println!("Found Projects: {}", join(rec.found.iter()));
            if !rec.without_documents.is_empty() {
                println!("No documents for: {}", join(rec.without_documents.iter()));
            }
            if !rec.not_in_catalog.is_empty() {
                println!("Not in catalog: {}", join(rec.not_in_catalog.iter()));
            }
            if rec.is_consistent() {
                println!("Catalog and registry agree.");
            }
            println!("Unknown Project: {} documents", rec.unclassified);
        }
        ReconciliationOutcome::Skipped(reason) => {
            println!("Project reconciliation skipped: {reason}");
        }
    }
    Ok(())
}

fn run_enrich(args: EnrichArgs) -> Result<()> {
    let report = EnrichUseCase::new(args.into()).execute()?;

    for o in &report.outcomes {
        println!("Processed {}: {} chars extracted.", o.filename, o.chars);
    }
    println!(
        "Done. {}/{} documents have content. Wrote {}",
        report.with_content(),
        report.records.len(),
        report.output_path.display()
    );
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let query   = ListQuery { project: args.project, doc_type: args.doc_type };
    let records = ListUseCase::new(args.registry).execute(&query)?;

    if records.is_empty() {
        println!("No documents match.");
        return Ok(());
    }

    let preview = Preprocessor::with_limit(PREVIEW_CHARS);
    for r in &records {
        println!("{}: {} -> {}", r.doc_type, r.filename, r.path);
        if !r.excerpt().trim().is_empty() {
            println!("    {}", preview.excerpt(r.excerpt()));
        }
    }
    println!("{} documents", records.len());
    if records.iter().any(|r| !r.is_enriched()) {
        println!("Some entries have no excerpt yet; run `enrich` to add them.");
    }
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    for name in &args.filenames {
        let (project, doc_type) = classify(name);
        println!("{name}\t{project}\t{doc_type}");
    }
    Ok(())
}

fn join<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let v: Vec<&str> = items.map(|s| s.as_str()).collect();
    if v.is_empty() { "(none)".to_string() } else { v.join(", ") }
}
