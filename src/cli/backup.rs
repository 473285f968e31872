//! `parfum backup` command
//!
//! Copies the catalog to `backup-parfums-<timestamp>.json` in the same directory.

use anyhow::Result;
use colored::Colorize;

use super::utils::open_store;
use super::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let store = open_store(global)?;
    let target = store.backup()?;

    println!("{} Backup saved: {}", "💾".green(), target.display());
    Ok(())
}
