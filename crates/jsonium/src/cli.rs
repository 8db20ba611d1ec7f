//! CLI command structure using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsonium_core::DedupPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsonium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one document per template and combo
    Generate(GenerateArgs),

    /// Show the paths a path expression selects
    Expand {
        /// Path expression, e.g. "a.@each.{b,c}"
        expression: String,

        /// Resolve `@each` against this JSON document
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a multi-stage TOML plan
    Run {
        /// Plan file
        plan: PathBuf,

        /// Print this stage instead of the plan's output stage
        #[arg(short, long)]
        stage: Option<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON file holding an array of templates
    #[arg(short, long)]
    pub templates: PathBuf,

    /// JSON file holding an array of combos
    #[arg(short, long)]
    pub combos: PathBuf,

    /// Path expression to substitute along (repeatable)
    #[arg(short, long = "path")]
    pub paths: Vec<String>,

    /// Remove duplicate results
    #[arg(short, long)]
    pub unique: bool,

    /// Equality used by --unique
    #[arg(long, value_enum, default_value_t = DedupArg::Structural)]
    pub dedup: DedupArg,

    /// Rename a top-level key of every result (repeatable)
    #[arg(short, long = "rename", value_name = "BEFORE=AFTER", value_parser = parse_rename)]
    pub renames: Vec<(String, String)>,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DedupArg {
    Structural,
    Serialized,
}

impl From<DedupArg> for DedupPolicy {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Structural => DedupPolicy::Structural,
            DedupArg::Serialized => DedupPolicy::Serialized,
        }
    }
}

fn parse_rename(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((before, after)) if !before.is_empty() && !after.is_empty() => {
            Ok((before.to_string(), after.to_string()))
        }
        _ => Err(format!("expected BEFORE=AFTER, got '{}'", s)),
    }
}
