//! One-time import of card text into the shared pool

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cards_server::db::connect_and_migrate;
use cards_server::import::seed_from_file;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Document with cards separated by blank lines (.txt or .docx)
    pub path: PathBuf,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Insert even when the card pool already has cards
    #[arg(long)]
    pub force: bool,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    if !args.path.exists() {
        anyhow::bail!("input path {} does not exist", args.path.display());
    }

    // Seeding is a single sequential pass
    let pool = connect_and_migrate(&args.database_url, 1)
        .await
        .context("Database startup failed")?;

    let report = seed_from_file(&pool, &args.path, args.force)
        .await
        .with_context(|| format!("Failed to seed cards from {}", args.path.display()))?;

    if report.already_seeded {
        println!("Card pool already has cards; use --force to import anyway");
    } else {
        println!(
            "Imported {} card(s), skipped {}",
            report.inserted, report.skipped
        );
    }

    Ok(())
}
