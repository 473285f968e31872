//! `parfum recommend`, `parfum ask` and `parfum compare` commands
//!
//! Front-end for the AI consultant. Missing inputs are collected
//! interactively; the catalog snapshot is loaded once per command.
//!
//! # Usage
//! ```bash
//! parfum recommend                                   # wizard
//! parfum recommend --gender women --occasion office,night --budget medium "vanilla, amber"
//! parfum ask "What is the difference between EDT and EDP?"
//! parfum compare "Sauvage" "Bleu de Chanel"
//! parfum compare                                     # pick from the catalog
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};

use super::utils::{consultant_config, open_store, parse_gender, validate_question};
use super::GlobalArgs;
use crate::consult::{ConsultationClient, PreferenceProfile};
use crate::core::parfum::Gender;
use crate::error::Error;

const OCCASIONS: [&str; 7] = ["Casual", "Office", "Formal", "Night", "Party", "Romantic", "Sport"];
const SEASONS: [&str; 5] = ["Spring", "Summer", "Fall", "Winter", "All Season"];
const BUDGETS: [&str; 5] = ["Low", "Medium", "Medium-High", "High", "No preference"];

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Free-text preferences (liked notes, character, ...); prompts when omitted
    pub details: Option<String>,

    /// Men, Women or Unisex
    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Occasions (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub occasion: Vec<String>,

    /// Seasons (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub season: Vec<String>,

    /// Budget, e.g. low, medium, high
    #[arg(long)]
    pub budget: Option<String>,
}

pub fn run_recommend(args: RecommendArgs, global: &GlobalArgs) -> Result<()> {
    let client = ConsultationClient::new(&consultant_config(global)?)?;
    let catalog = open_store(global)?.load()?;

    let profile = collect_profile(args)?;
    if profile.details.trim().chars().count() <= 5 {
        return Err(Error::Validation("please describe your preferences in more detail".into()).into());
    }

    eprintln!("{}", "Analysing your preferences...".dimmed());
    let answer = client.recommend(&profile.render(), &catalog)?;

    println!("{}\n", "📝 Recommendations for you".green().bold());
    println!("{}", answer);
    Ok(())
}

/// Fill in whatever the flags left out with interactive prompts
fn collect_profile(args: RecommendArgs) -> Result<PreferenceProfile> {
    let interactive = args.details.is_none();

    let gender = match args.gender {
        Some(g) => g,
        None if interactive => {
            let labels: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
            let idx = Select::new()
                .with_prompt("Gender")
                .items(&labels)
                .default(0)
                .interact()?;
            Gender::ALL[idx]
        }
        None => Gender::Unisex,
    };

    let occasions = if args.occasion.is_empty() && interactive {
        pick_many("Occasions", &OCCASIONS)?
    } else {
        args.occasion
    };

    let seasons = if args.season.is_empty() && interactive {
        pick_many("Seasons", &SEASONS)?
    } else {
        args.season
    };

    let budget = match args.budget {
        Some(b) => b,
        None if interactive => {
            let idx = Select::new()
                .with_prompt("Budget")
                .items(&BUDGETS)
                .default(1)
                .interact()?;
            BUDGETS[idx].to_string()
        }
        None => "No preference".to_string(),
    };

    let details = match args.details {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("Describe your preferences (notes you like, character, ...)")
            .interact_text()?,
    };

    Ok(PreferenceProfile {
        gender,
        occasions,
        seasons,
        budget,
        details,
    })
}

fn pick_many(prompt: &str, items: &[&str]) -> Result<Vec<String>> {
    let picked = MultiSelect::new()
        .with_prompt(prompt)
        .items(items)
        .interact()?;
    Ok(picked.into_iter().map(|i| items[i].to_string()).collect())
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Any fragrance question
    pub question: String,
}

pub fn run_ask(args: AskArgs, global: &GlobalArgs) -> Result<()> {
    validate_question(&args.question)?;

    let client = ConsultationClient::new(&consultant_config(global)?)?;
    let catalog = open_store(global)?.load()?;

    eprintln!("{}", "Looking for an answer...".dimmed());
    let answer = client.answer(&args.question, &catalog)?;

    println!("{}\n", "💡 Answer".green().bold());
    println!("{}", answer);
    Ok(())
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First parfum name (exact)
    #[arg(requires = "second")]
    pub first: Option<String>,

    /// Second parfum name (exact)
    pub second: Option<String>,
}

pub fn run_compare(args: CompareArgs, global: &GlobalArgs) -> Result<()> {
    let client = ConsultationClient::new(&consultant_config(global)?)?;
    let catalog = open_store(global)?.load()?;

    let (first, second) = match (args.first, args.second) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            let names: Vec<&str> = catalog.parfums.iter().map(|p| p.name.as_str()).collect();
            if names.len() < 2 {
                return Err(Error::Validation("the catalog needs at least two parfums to compare".into()).into());
            }
            let a = Select::new()
                .with_prompt("First parfum")
                .items(&names)
                .default(0)
                .interact()?;
            let b = Select::new()
                .with_prompt("Second parfum")
                .items(&names)
                .default(1)
                .interact()?;
            (names[a].to_string(), names[b].to_string())
        }
    };

    if first == second {
        return Err(Error::Validation("pick two different parfums".into()).into());
    }

    eprintln!("{}", "Comparing parfums...".dimmed());
    let comparison = client.compare(&first, &second, &catalog)?;

    println!(
        "{}\n",
        format!("📊 {} VS {}", first, second).green().bold()
    );
    println!("{}", comparison);
    Ok(())
}
