//! `parfum delete` command
//!
//! # Usage
//! ```bash
//! parfum delete 3            # asks for confirmation
//! parfum delete 3 --force
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use super::utils::open_store;
use super::GlobalArgs;
use crate::error::Error;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Parfum ID
    pub id: String,

    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: DeleteArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global)?;
    let parfum = store
        .get_by_id(&args.id)?
        .ok_or_else(|| Error::NotFound(args.id.clone()))?;

    if !args.force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Really delete \"{}\" - {}?",
                parfum.name, parfum.brand
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Deletion cancelled.".yellow());
            return Ok(());
        }
    }

    let removed = store.delete(&args.id)?;
    println!("{} Parfum \"{}\" deleted!", "✅".green(), removed.name);

    Ok(())
}
