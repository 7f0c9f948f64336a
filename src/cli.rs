use crate::domain::constants::DATA_DIR_ENV;
use crate::domain::models::PairSeparator;
use crate::logging::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drugcheck",
    version,
    about = "Drug interaction and side effects checker over local datasets"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = DATA_DIR_ENV,
        help = "Directory holding the mapping, interactions and side effects files"
    )]
    pub data_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Config file (default: ~/.config/drugcheck/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check two drugs for a known interaction and list their side effects
    Check {
        drug1: String,
        drug2: String,
        #[arg(long, help = "Suggested brand to use if the first name is not exact")]
        pick1: Option<String>,
        #[arg(long, help = "Suggested brand to use if the second name is not exact")]
        pick2: Option<String>,
    },
    /// Resolve one brand or generic name
    Resolve {
        name: String,
        #[arg(long, help = "Suggested brand to use if the name is not exact")]
        pick: Option<String>,
    },
    /// List brand names similar to the input with their scores
    Suggest {
        name: String,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        cutoff: Option<f64>,
    },
    /// Look up the interaction between two generic names
    Interaction { generic1: String, generic2: String },
    /// Resolve a name and list its side effects
    SideEffects { name: String },
    /// Prompt for drug pairs until EOF or `:q`
    Interactive,
    /// Load all datasets and report counts and digests
    Validate,
    /// Generate synthetic interaction and side effects datasets
    Generate {
        #[arg(long, help = "Mapping file (default: <data-dir>/drug_name_mapping.json)")]
        mapping: Option<PathBuf>,
        #[arg(long, help = "Output directory (default: <data-dir>)")]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PairSeparator::Single)]
        separator: PairSeparator,
    },
}
