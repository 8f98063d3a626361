use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info};

use lingo_merge::{read_languages, MergeConfig, MergeReport, TreeMerger, TreeUnmerger};
use lingo_schema::{JsonSchemaValidator, SchemaGate};
use lingo_store::{sort_skills, DirectoryStore, DocumentSource, OutputSink};
use lingo_types::LangCode;

use crate::cli::*;
use crate::config::LingoConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = LingoConfig::load(&dir)?;
    let store = DirectoryStore::open(&dir, config.store.clone())
        .with_context(|| format!("opening document directory {}", dir.display()))?;

    match cli.command {
        Command::Merge(_) => cmd_merge(&store, cli.schema.as_deref(), &config.merge, cli.format),
        Command::Unmerge(args) => cmd_unmerge(&store, args, &config.merge),
        Command::SortSkills(_) => cmd_sort_skills(&store, cli.schema.as_deref()),
    }
}

fn cmd_merge(
    store: &DirectoryStore,
    schema: Option<&Path>,
    config: &MergeConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let gate = build_gate(store, schema)?;
    let report = merge_documents(store, store, &gate, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let codes: Vec<&str> = report.languages.iter().map(LangCode::as_str).collect();
            println!(
                "{} Merged {} languages ({}) into {}",
                "✓".green().bold(),
                report.languages.len(),
                codes.join(", ").cyan(),
                store.merged_path().display().to_string().bold()
            );
            if report.is_uniform() {
                println!("  Divergences: {}", "none".green());
            } else {
                println!("  Divergences: {}", report.divergence_count().to_string().yellow());
                for path in &report.divergences {
                    println!("    {} {}", "~".yellow(), path.to_string().dimmed());
                }
            }
        }
    }
    Ok(())
}

fn cmd_unmerge(store: &DirectoryStore, args: UnmergeArgs, config: &MergeConfig) -> anyhow::Result<()> {
    let languages = unmerge_documents(store, store, config, &args.languages)?;
    for lang in &languages {
        println!("  {} {}", "wrote:".green(), store.language_path(lang).display());
    }
    println!("{} Unmerged {} languages", "✓".green().bold(), languages.len());
    Ok(())
}

fn cmd_sort_skills(store: &DirectoryStore, schema: Option<&Path>) -> anyhow::Result<()> {
    let gate = build_gate(store, schema)?;
    let sorted = sort_documents(store, store, &gate)?;
    println!("{} Sorted {} skill entries", "✓".green().bold(), sorted);
    Ok(())
}

/// Schema from the command line, else from the store configuration, else
/// the bundled JSON Resume schema.
fn build_gate(store: &DirectoryStore, schema: Option<&Path>) -> anyhow::Result<SchemaGate> {
    match schema.map(Path::to_path_buf).or_else(|| store.schema_path()) {
        Some(path) => {
            let validator = JsonSchemaValidator::from_file(&path)
                .with_context(|| format!("loading schema {}", path.display()))?;
            info!(schema = %path.display(), "validating against schema");
            Ok(SchemaGate::with_schema(validator))
        }
        None => {
            info!("validating against the bundled JSON Resume schema");
            SchemaGate::json_resume().context("compiling the bundled JSON Resume schema")
        }
    }
}

/// Load, validate and merge every language document, then write the result.
pub fn merge_documents(
    source: &dyn DocumentSource,
    sink: &dyn OutputSink,
    gate: &SchemaGate,
    config: &MergeConfig,
) -> anyhow::Result<MergeReport> {
    info!("loading language documents");
    let langs = source.load_languages()?;
    gate.check_all(&langs)?;

    info!(languages = langs.len(), "merging");
    let outcome = TreeMerger::new(config.clone())
        .merge_with_report(&langs)
        .context("merge failed")?;
    sink.write_merged(&outcome.document)?;
    Ok(outcome.report)
}

/// Split the merged document and write one document per language.
///
/// `languages` overrides the document's `meta.lang` when non-empty. Returns
/// the languages written, in the order they were requested.
pub fn unmerge_documents(
    source: &dyn DocumentSource,
    sink: &dyn OutputSink,
    config: &MergeConfig,
    languages: &[LangCode],
) -> anyhow::Result<Vec<LangCode>> {
    let merged = source.load_merged()?;
    let languages = if languages.is_empty() {
        read_languages(&merged)?
    } else {
        languages.to_vec()
    };
    debug!(?languages, "target languages");

    info!("unmerging");
    let split = TreeUnmerger::new(config.clone())
        .unmerge(&merged, &languages)
        .context("unmerge failed")?;
    sink.write_languages(&split)?;

    let mut written = Vec::with_capacity(split.len());
    for lang in languages {
        if !written.contains(&lang) {
            written.push(lang);
        }
    }
    Ok(written)
}

/// Sort the skills of every language document and write them back. Returns
/// the total number of entries sorted.
pub fn sort_documents(
    source: &dyn DocumentSource,
    sink: &dyn OutputSink,
    gate: &SchemaGate,
) -> anyhow::Result<usize> {
    info!("sorting skills");
    let mut langs = source.load_languages()?;
    gate.check_all(&langs)?;

    let mut sorted = 0;
    for (lang, document) in langs.iter_mut() {
        sorted += sort_skills(lang.as_str(), document)?;
    }
    sink.write_languages(&langs)?;
    Ok(sorted)
}
