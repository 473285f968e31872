//! Stats command - Show catalog statistics
//!
//! Also hosts the `brands` and `categories` reference listings.

use clap::Args;

use super::utils::open_store;
use super::GlobalArgs;

/// Stats command arguments
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs, global: &GlobalArgs) -> anyhow::Result<()> {
    let store = open_store(global)?;
    let stats = store.stats()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("📊 Catalog Statistics\n");
    println!("  Total parfums:    {}", stats.total_parfums);
    println!("  Total brands:     {}", stats.total_brands);
    println!("  Total categories: {}", stats.total_categories);

    println!("\n👥 By gender:");
    for (gender, count) in &stats.by_gender {
        println!("  {:<12} {} ({}%)", gender, count, percent(*count, stats.total_parfums));
    }

    println!("\n💰 By price range:");
    for (price, count) in &stats.by_price_range {
        println!("  {:<12} {} ({}%)", price, count, percent(*count, stats.total_parfums));
    }

    println!("\n📁 Catalog: {}", store.path().display());

    Ok(())
}

fn percent(count: usize, total: usize) -> usize {
    if total > 0 {
        count * 100 / total
    } else {
        0
    }
}

pub fn run_brands(global: &GlobalArgs) -> anyhow::Result<()> {
    let store = open_store(global)?;
    print_list("🏢 Brands", &store.brands()?);
    Ok(())
}

pub fn run_categories(global: &GlobalArgs) -> anyhow::Result<()> {
    let store = open_store(global)?;
    print_list("🏷️  Categories", &store.categories()?);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("{}: none", title);
        return;
    }

    println!("{} ({}):", title, items.len());
    for item in items {
        println!("  {}", item);
    }
}
