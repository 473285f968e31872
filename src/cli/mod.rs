//! CLI module - Command definitions and handlers
//!
//! Admin commands edit the catalog; consultation commands ask the AI consultant.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod add;
pub mod backup;
pub mod consult;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod stats;
pub mod utils;

/// parfum - fragrance catalog with an AI consultant
#[derive(Parser, Debug)]
#[command(name = "parfum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog JSON file (overrides config)
    #[arg(long, global = true, env = "PARFUM_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Completion service API key
    #[arg(long, global = true, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Completion service URL (overrides config)
    #[arg(long, global = true, env = "DEEPSEEK_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .parfum/config.toml and an empty catalog
    Init(init::InitArgs),

    /// List every parfum
    List(list::ListArgs),

    /// Show one parfum by ID
    Show(list::ShowArgs),

    /// Search name, brand, category and description
    Search(search::SearchArgs),

    /// Filter by brand, category or gender
    Filter(search::FilterArgs),

    /// Add a new parfum
    Add(add::AddArgs),

    /// Edit fields of an existing parfum
    Edit(edit::EditArgs),

    /// Delete a parfum
    Delete(delete::DeleteArgs),

    /// Show catalog statistics
    Stats(stats::StatsArgs),

    /// List reference brands
    Brands,

    /// List reference categories
    Categories,

    /// Copy the catalog to a timestamped backup file
    Backup,

    /// Get parfum recommendations from the AI consultant
    Recommend(consult::RecommendArgs),

    /// Ask the AI consultant a fragrance question
    Ask(consult::AskArgs),

    /// Compare two parfums with the AI consultant
    Compare(consult::CompareArgs),
}
