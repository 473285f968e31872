//! `parfum list` and `parfum show` commands
//!
//! # Usage
//! ```bash
//! parfum list
//! parfum list --json
//! parfum show 3
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{catalog_table, open_store, print_detail};
use super::GlobalArgs;
use crate::error::Error;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_list(args: ListArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.load()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&doc.parfums)?);
        return Ok(());
    }

    if doc.is_empty() {
        println!("{}", "The catalog is empty. Add one with `parfum add`.".yellow());
        return Ok(());
    }

    println!("📋 {} parfum(s)\n", doc.len());
    println!("{}", catalog_table(&doc.parfums));
    Ok(())
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Parfum ID
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_show(args: ShowArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global)?;
    let parfum = store
        .get_by_id(&args.id)?
        .ok_or_else(|| Error::NotFound(args.id.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parfum)?);
    } else {
        print_detail(&parfum);
    }
    Ok(())
}
