//! `parfum init` command
//!
//! Initializes a parfum workspace.
//!
//! # Usage
//! ```bash
//! parfum init                    # Initialize in current directory
//! parfum init /path/to/project   # Initialize in specific path
//! parfum init --global           # Initialize global ~/.parfum
//! ```

use anyhow::{bail, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::catalog::CatalogStore;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Initialize global config (~/.parfum)
    #[arg(long)]
    pub global: bool,

    /// Overwrite an existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    // 1. Determine target path
    let base_path = if args.global {
        directories::UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        args.path.unwrap_or_else(|| PathBuf::from("."))
    };

    let parfum_dir = base_path.join(".parfum");
    let config_path = parfum_dir.join("config.toml");

    // 2. Check if already initialized
    if config_path.exists() && !args.force {
        bail!(
            "Directory {} is already initialized. Use --force to reinitialize.",
            base_path.display()
        );
    }

    println!("🚀 Initializing parfum in: {}", base_path.display());

    // 3. Write config; the catalog path stays relative to the workspace root
    fs::create_dir_all(&parfum_dir)?;
    let config = Config::default();
    config.save_to(&config_path)?;

    // 4. Seed an empty catalog unless one is already there
    let store = CatalogStore::open(base_path.join(&config.catalog.path));
    let created = store.init_empty()?;

    println!("\n✅ Initialized parfum workspace");
    println!("   Config:  {}", config_path.display());
    if created {
        println!("   Catalog: {} (empty)", store.path().display());
    } else {
        println!("   Catalog: {} (kept existing)", store.path().display());
    }
    println!("\nNext steps:");
    println!("  parfum add --help");
    println!("  export DEEPSEEK_API_KEY=...   # for recommend / ask / compare");

    Ok(())
}
