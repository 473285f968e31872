//! parfum CLI - Entry point
//!
//! Usage: parfum <command> [options]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parfum::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (stderr, so command output stays clean)
    let default_level = if cli.global.verbose { "parfum=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => parfum::cli::init::run(args),
        Commands::List(args) => parfum::cli::list::run_list(args, &global),
        Commands::Show(args) => parfum::cli::list::run_show(args, &global),
        Commands::Search(args) => parfum::cli::search::run_search(args, &global),
        Commands::Filter(args) => parfum::cli::search::run_filter(args, &global),
        Commands::Add(args) => parfum::cli::add::run(args, &global),
        Commands::Edit(args) => parfum::cli::edit::run(args, &global),
        Commands::Delete(args) => parfum::cli::delete::run(args, &global),
        Commands::Stats(args) => parfum::cli::stats::execute(args, &global),
        Commands::Brands => parfum::cli::stats::run_brands(&global),
        Commands::Categories => parfum::cli::stats::run_categories(&global),
        Commands::Backup => parfum::cli::backup::run(&global),
        Commands::Recommend(args) => parfum::cli::consult::run_recommend(args, &global),
        Commands::Ask(args) => parfum::cli::consult::run_ask(args, &global),
        Commands::Compare(args) => parfum::cli::consult::run_compare(args, &global),
    }
}

/// Print the error chain plus guidance for known error kinds
fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", "❌ Error:".red().bold(), err);

    if let Some(e) = err.downcast_ref::<parfum::Error>() {
        eprintln!("   {}", e.hint().dimmed());
    }
}
