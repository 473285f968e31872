//! CLI utility functions
//!
//! Common helpers shared across CLI commands:
//! - Resolving the catalog store and consultant settings
//! - Table rendering
//! - Input validation (the core does not re-validate what it is given)

use anyhow::Result;
use chrono::Datelike;
use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::GlobalArgs;
use crate::config::{Config, ConsultantConfig};
use crate::core::catalog::CatalogStore;
use crate::core::parfum::{Gender, NewParfum, Notes, Parfum, ParfumPatch, PriceRange, Sillage};
use crate::error::Error;

/// Open the catalog store selected by flags, environment or config
pub fn open_store(global: &GlobalArgs) -> Result<CatalogStore> {
    let config = Config::load()?;
    let path = config.catalog_path(global.catalog.as_deref());
    tracing::debug!(path = %path.display(), "using catalog");
    Ok(CatalogStore::open(path))
}

/// Consultant settings from config with flag/environment overrides applied
pub fn consultant_config(global: &GlobalArgs) -> Result<ConsultantConfig> {
    let config = Config::load()?;
    Ok(config
        .consultant
        .with_overrides(global.api_key.as_deref(), global.api_url.as_deref()))
}

pub fn parse_gender(s: &str) -> std::result::Result<Gender, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

pub fn parse_price_range(s: &str) -> std::result::Result<PriceRange, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

pub fn parse_sillage(s: &str) -> std::result::Result<Sillage, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

// ============== Tables ==============

#[derive(Tabled)]
struct CatalogRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Brand")]
    brand: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Gender")]
    gender: Gender,
    #[tabled(rename = "Year")]
    year: i32,
}

#[derive(Tabled)]
struct ResultRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Brand")]
    brand: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Gender")]
    gender: Gender,
    #[tabled(rename = "Price Range")]
    price_range: PriceRange,
}

/// Full listing table (with release year)
pub fn catalog_table(parfums: &[Parfum]) -> String {
    let rows = parfums.iter().map(|p| CatalogRow {
        id: &p.id,
        name: &p.name,
        brand: &p.brand,
        category: &p.category,
        gender: p.gender,
        year: p.year_released,
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Search result table (with price range)
pub fn results_table(parfums: &[Parfum]) -> String {
    let rows = parfums.iter().map(|p| ResultRow {
        id: &p.id,
        name: &p.name,
        brand: &p.brand,
        category: &p.category,
        gender: p.gender,
        price_range: p.price_range,
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn print_results(parfums: &[Parfum], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(parfums)?);
        return Ok(());
    }

    if parfums.is_empty() {
        println!("{}", "No parfums found.".yellow());
        return Ok(());
    }

    println!("{} {} parfum(s):\n", "✅ Found".green(), parfums.len());
    println!("{}", results_table(parfums));
    Ok(())
}

/// Multi-line detail view of one parfum
pub fn print_detail(p: &Parfum) {
    println!("{} {}", p.name.cyan().bold(), format!("({})", p.brand).dimmed());
    println!("{}", "─".repeat(60));
    println!("  {:<13} {}", "ID:".dimmed(), p.id);
    println!("  {:<13} {}", "Category:".dimmed(), p.category);
    println!("  {:<13} {}", "Gender:".dimmed(), p.gender);
    println!("  {:<13} {}", "Top notes:".dimmed(), p.notes.top.join(", "));
    println!("  {:<13} {}", "Middle notes:".dimmed(), p.notes.middle.join(", "));
    println!("  {:<13} {}", "Base notes:".dimmed(), p.notes.base.join(", "));
    println!("  {:<13} {}", "Price range:".dimmed(), p.price_range);
    println!("  {:<13} {}", "Longevity:".dimmed(), p.longevity);
    println!("  {:<13} {}", "Sillage:".dimmed(), p.sillage);
    println!("  {:<13} {}", "Season:".dimmed(), p.season);
    println!("  {:<13} {}", "Occasion:".dimmed(), p.occasion);
    println!("  {:<13} {}", "Released:".dimmed(), p.year_released);
    println!();
    println!("  {}", p.description);
}

// ============== Validation ==============

fn min_len(field: &str, value: &str, min: usize) -> std::result::Result<(), Error> {
    if value.trim().chars().count() < min {
        return Err(Error::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

fn non_empty_notes(layer: &str, notes: &[String]) -> std::result::Result<(), Error> {
    if notes.is_empty() {
        return Err(Error::Validation(format!("{} notes must not be empty", layer)));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> std::result::Result<(), Error> {
    let current = chrono::Utc::now().year();
    if !(1800..=current).contains(&year) {
        return Err(Error::Validation(format!(
            "release year {} is not between 1800 and {}",
            year, current
        )));
    }
    Ok(())
}

pub fn validate_notes(notes: &Notes) -> std::result::Result<(), Error> {
    non_empty_notes("top", &notes.top)?;
    non_empty_notes("middle", &notes.middle)?;
    non_empty_notes("base", &notes.base)
}

/// Rules the admin editor enforces before anything reaches the store
pub fn validate_new(fields: &NewParfum) -> std::result::Result<(), Error> {
    min_len("name", &fields.name, 3)?;
    min_len("brand", &fields.brand, 2)?;
    min_len("category", &fields.category, 3)?;
    validate_notes(&fields.notes)?;
    min_len("description", &fields.description, 10)?;
    min_len("longevity", &fields.longevity, 1)?;
    validate_year(fields.year_released)
}

/// Same rules, applied only to the fields being changed
pub fn validate_patch(patch: &ParfumPatch) -> std::result::Result<(), Error> {
    if patch.is_empty() {
        return Err(Error::Validation("nothing to update".to_string()));
    }
    if let Some(ref v) = patch.name {
        min_len("name", v, 3)?;
    }
    if let Some(ref v) = patch.brand {
        min_len("brand", v, 2)?;
    }
    if let Some(ref v) = patch.category {
        min_len("category", v, 3)?;
    }
    if let Some(ref notes) = patch.notes {
        validate_notes(notes)?;
    }
    if let Some(ref v) = patch.description {
        min_len("description", v, 10)?;
    }
    if let Some(ref v) = patch.longevity {
        min_len("longevity", v, 1)?;
    }
    if let Some(year) = patch.year_released {
        validate_year(year)?;
    }
    Ok(())
}

pub fn validate_query(query: &str) -> std::result::Result<(), Error> {
    min_len("search query", query, 3)
}

pub fn validate_question(question: &str) -> std::result::Result<(), Error> {
    min_len("question", question, 4)
}
