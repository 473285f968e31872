//! `parfum search` and `parfum filter` commands
//!
//! # Usage
//! ```bash
//! parfum search rose
//! parfum search "CHANEL" --json
//! parfum filter --brand dior
//! parfum filter --category floral
//! parfum filter --gender men        # includes Unisex parfums
//! ```

use anyhow::Result;
use clap::{ArgGroup, Args};

use super::utils::{open_store, print_results, validate_query};
use super::GlobalArgs;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword matched against name, brand, category and description
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_search(args: SearchArgs, global: &GlobalArgs) -> Result<()> {
    validate_query(&args.query)?;

    let store = open_store(global)?;
    let results = store.search(&args.query)?;
    print_results(&results, args.json)
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("criterion").required(true).args(["brand", "category", "gender"])))]
pub struct FilterArgs {
    /// Exact brand (case-insensitive)
    #[arg(long)]
    pub brand: Option<String>,

    /// Category keyword (case-insensitive substring)
    #[arg(long)]
    pub category: Option<String>,

    /// Men, Women or Unisex; Unisex parfums always match
    #[arg(long)]
    pub gender: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_filter(args: FilterArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global)?;

    let results = if let Some(ref brand) = args.brand {
        store.get_by_brand(brand)?
    } else if let Some(ref category) = args.category {
        store.get_by_category(category)?
    } else if let Some(ref gender) = args.gender {
        store.get_by_gender(gender)?
    } else {
        Vec::new()
    };

    print_results(&results, args.json)
}
