use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lingo_types::LangCode;

#[derive(Debug, Parser)]
#[command(
    name = "lingo",
    about = "Lingo: merge per-language JSON résumés into one document and split them back",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the <lang>.json files and the merged document
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// JSON Schema every language file must satisfy
    #[arg(short, long, global = true, value_name = "SCHEMA_FILE")]
    pub schema: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge every <lang>.json into the merged document
    Merge(MergeArgs),
    /// Split the merged document into one <lang>.json per language
    Unmerge(UnmergeArgs),
    /// Sort the skills of every <lang>.json by name
    SortSkills(SortSkillsArgs),
}

#[derive(Debug, Args)]
pub struct MergeArgs {}

#[derive(Debug, Args)]
pub struct UnmergeArgs {
    /// Languages to extract instead of those listed in meta.lang
    #[arg(short, long = "lang", value_name = "CODE")]
    pub languages: Vec<LangCode>,
}

#[derive(Debug, Args)]
pub struct SortSkillsArgs {}
