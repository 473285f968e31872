//! `parfum add` command
//!
//! Adds a new parfum to the catalog. The ID is assigned by the store.
//!
//! # Usage
//! ```bash
//! parfum add --name "Sauvage" --brand Dior --category "Aromatic Fougere" \
//!     --gender men --top "Bergamot, Pepper" --middle "Lavender, Geranium" \
//!     --base "Ambroxan, Cedar" --description "Fresh spicy signature" \
//!     --price-range high --longevity "8-10 hours" --sillage heavy --year 2015
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{open_store, parse_gender, parse_price_range, parse_sillage, validate_new};
use super::GlobalArgs;
use crate::core::parfum::{Gender, NewParfum, Notes, PriceRange, Sillage};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Parfum name (min 3 characters)
    #[arg(long)]
    pub name: String,

    /// Brand (min 2 characters)
    #[arg(long)]
    pub brand: String,

    /// Category, e.g. "Floral Oriental", "Woody Aromatic"
    #[arg(long)]
    pub category: String,

    /// Men, Women or Unisex
    #[arg(long, value_parser = parse_gender)]
    pub gender: Gender,

    /// Top notes (comma-separated)
    #[arg(long)]
    pub top: String,

    /// Middle notes (comma-separated)
    #[arg(long)]
    pub middle: String,

    /// Base notes (comma-separated)
    #[arg(long)]
    pub base: String,

    /// Description (min 10 characters)
    #[arg(long)]
    pub description: String,

    /// low, medium, medium-high, high or luxury
    #[arg(long, value_parser = parse_price_range)]
    pub price_range: PriceRange,

    /// Longevity, e.g. "6-8 hours"
    #[arg(long)]
    pub longevity: String,

    /// light, moderate, moderate-heavy or heavy
    #[arg(long, value_parser = parse_sillage)]
    pub sillage: Sillage,

    /// Season, e.g. all, spring-summer, fall-winter
    #[arg(long, default_value = "all")]
    pub season: String,

    /// Occasion, e.g. casual, formal, night
    #[arg(long, default_value = "casual")]
    pub occasion: String,

    /// Release year
    #[arg(long)]
    pub year: i32,
}

impl AddArgs {
    fn into_new_parfum(self) -> NewParfum {
        NewParfum {
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            category: self.category.trim().to_string(),
            gender: self.gender,
            notes: Notes {
                top: Notes::parse_list(&self.top),
                middle: Notes::parse_list(&self.middle),
                base: Notes::parse_list(&self.base),
            },
            description: self.description.trim().to_string(),
            price_range: self.price_range,
            longevity: self.longevity.trim().to_string(),
            sillage: self.sillage,
            season: self.season.trim().to_string(),
            occasion: self.occasion.trim().to_string(),
            year_released: self.year,
        }
    }
}

pub fn run(args: AddArgs, global: &GlobalArgs) -> Result<()> {
    let fields = args.into_new_parfum();
    validate_new(&fields)?;

    let store = open_store(global)?;
    let parfum = store.add(fields)?;

    println!(
        "{} Parfum \"{}\" added with ID: {}",
        "✅".green(),
        parfum.name,
        parfum.id.cyan()
    );

    Ok(())
}
