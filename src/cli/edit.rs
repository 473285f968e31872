//! `parfum edit` command
//!
//! Changes only the fields given as flags; everything else is kept.
//!
//! # Usage
//! ```bash
//! parfum edit 3 --price-range luxury
//! parfum edit 3 --name "Sauvage Elixir" --top "Cinnamon, Nutmeg"
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{open_store, parse_gender, parse_price_range, parse_sillage, validate_patch};
use super::GlobalArgs;
use crate::core::parfum::{Gender, Notes, ParfumPatch, PriceRange, Sillage};
use crate::error::Error;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Parfum ID
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Top notes (comma-separated); requires --middle and --base
    #[arg(long, requires_all = ["middle", "base"])]
    pub top: Option<String>,

    /// Middle notes (comma-separated)
    #[arg(long, requires_all = ["top", "base"])]
    pub middle: Option<String>,

    /// Base notes (comma-separated)
    #[arg(long, requires_all = ["top", "middle"])]
    pub base: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_parser = parse_price_range)]
    pub price_range: Option<PriceRange>,

    #[arg(long)]
    pub longevity: Option<String>,

    #[arg(long, value_parser = parse_sillage)]
    pub sillage: Option<Sillage>,

    #[arg(long)]
    pub season: Option<String>,

    #[arg(long)]
    pub occasion: Option<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<i32>,
}

impl EditArgs {
    fn to_patch(&self) -> ParfumPatch {
        let trimmed = |v: &Option<String>| v.as_ref().map(|s| s.trim().to_string());

        let notes = match (&self.top, &self.middle, &self.base) {
            (Some(top), Some(middle), Some(base)) => Some(Notes {
                top: Notes::parse_list(top),
                middle: Notes::parse_list(middle),
                base: Notes::parse_list(base),
            }),
            _ => None,
        };

        ParfumPatch {
            name: trimmed(&self.name),
            brand: trimmed(&self.brand),
            category: trimmed(&self.category),
            gender: self.gender,
            notes,
            description: trimmed(&self.description),
            price_range: self.price_range,
            longevity: trimmed(&self.longevity),
            sillage: self.sillage,
            season: trimmed(&self.season),
            occasion: trimmed(&self.occasion),
            year_released: self.year,
        }
    }
}

pub fn run(args: EditArgs, global: &GlobalArgs) -> Result<()> {
    let patch = args.to_patch();
    validate_patch(&patch)?;

    let store = open_store(global)?;
    let current = store
        .get_by_id(&args.id)?
        .ok_or_else(|| Error::NotFound(args.id.clone()))?;
    println!(
        "{} {} - {}",
        "Editing:".yellow(),
        current.name,
        current.brand
    );

    let updated = store.update(&args.id, patch)?;
    println!("{} Parfum \"{}\" updated!", "✅".green(), updated.name);

    Ok(())
}
