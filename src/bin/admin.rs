//! CLI administration tool for the code camp service.
//!
//! Provides commands for inspecting camps, managing speakers and checking the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List camps
//! cargo run --bin admin -- camp list
//!
//! # List speakers
//! cargo run --bin admin -- speaker list
//!
//! # Add a speaker (prompts for missing fields)
//! cargo run --bin admin -- speaker add --first-name Grace --last-name Hopper
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use code_camp::domain::entities::Speaker;
use code_camp::domain::repositories::CampRepository;
use code_camp::infrastructure::persistence::PgCampRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the code camp service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect camps
    Camp {
        #[command(subcommand)]
        action: CampAction,
    },

    /// Manage speakers
    Speaker {
        #[command(subcommand)]
        action: SpeakerAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CampAction {
    /// List all camps with their talk counts
    List,
}

#[derive(Subcommand)]
enum SpeakerAction {
    /// List all speakers
    List,

    /// Add a speaker
    Add {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = Arc::new(PgCampRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Camp { action } => match action {
            CampAction::List => list_camps(repo).await?,
        },
        Commands::Speaker { action } => match action {
            SpeakerAction::List => list_speakers(repo).await?,
            SpeakerAction::Add {
                first_name,
                last_name,
                company,
                yes,
            } => add_speaker(repo, first_name, last_name, company, yes).await?,
        },
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists camps with their dates and number of talks.
///
/// # Output Format
///
/// ```text
/// 📋 Camps
///
///   Moniker    Name                           Date         Days  Talks
///   ──────────────────────────────────────────────────────────────────
///   ATL2018    Atlanta Code Camp              2018-10-18   1     2
/// ```
async fn list_camps(repo: Arc<PgCampRepository>) -> Result<()> {
    println!("{}", "📋 Camps".bright_blue().bold());
    println!();

    let camps = repo
        .list_camps(true)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list camps: {}", e))?;

    if camps.is_empty() {
        println!("{}", "  No camps found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<30} {:<12} {:<5} {:<5}",
        "Moniker".bright_white().bold(),
        "Name".bright_white().bold(),
        "Date".bright_white().bold(),
        "Days".bright_white().bold(),
        "Talks".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for camp in &camps {
        println!(
            "  {:<10} {:<30} {:<12} {:<5} {}",
            camp.moniker.cyan(),
            camp.name,
            camp.event_date.to_string().bright_black(),
            camp.length,
            camp.talks.len().to_string().bright_white()
        );
    }

    println!();
    println!("  Total: {}", camps.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn list_speakers(repo: Arc<PgCampRepository>) -> Result<()> {
    println!("{}", "🎤 Speakers".bright_blue().bold());
    println!();

    let speakers = repo
        .list_speakers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list speakers: {}", e))?;

    if speakers.is_empty() {
        println!("{}", "  No speakers found".yellow());
        println!();
        println!(
            "  Add one with: {} admin speaker add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<25}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Company".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for speaker in &speakers {
        println!(
            "  {:<4} {:<30} {}",
            speaker.id.to_string().bright_black(),
            speaker.display_name().cyan(),
            speaker.company.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!();

    Ok(())
}

/// Adds a speaker, prompting for any name not given on the command line.
async fn add_speaker(
    repo: Arc<PgCampRepository>,
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🎤 Add Speaker".bright_blue().bold());
    println!();

    let first_name = match first_name {
        Some(n) => n,
        None => Input::new().with_prompt("First name").interact_text()?,
    };
    let last_name = match last_name {
        Some(n) => n,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let first_name = first_name.trim().to_string();
    let last_name = last_name.trim().to_string();
    if first_name.is_empty() || last_name.is_empty() {
        anyhow::bail!("First and last name are required");
    }

    let speaker = Speaker {
        first_name,
        last_name,
        company,
        ..Speaker::default()
    };

    println!();
    println!("  Name:    {}", speaker.display_name().cyan());
    println!(
        "  Company: {}",
        speaker.company.as_deref().unwrap_or("-").bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Add this speaker?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let created = repo
        .insert_speaker(&speaker)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add speaker: {}", e))?
        .context("Speaker was not saved")?;

    println!();
    println!(
        "{} {}",
        "✅ Speaker added with id".green().bold(),
        created.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let camps: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM camps")
                .fetch_one(pool)
                .await?;
            let talks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talks")
                .fetch_one(pool)
                .await?;
            let speakers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM speakers")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Camps:      {}", camps.to_string().bright_green().bold());
            println!("  Talks:      {}", talks.to_string().bright_green().bold());
            println!("  Speakers:   {}", speakers.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
