// ABOUTME: BravoBall CLI - command-line tool for sessions and the drill catalog
// ABOUTME: Generates sessions from JSON configurations and browses stored drills
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors
//!
//! Usage:
//! ```bash
//! # Generate a session against the database catalog
//! bravoball-cli generate --config session.json
//!
//! # Generate against a JSON drill file, printing raw JSON
//! bravoball-cli generate --config session.json --catalog drills.json --json
//!
//! # Browse drills
//! bravoball-cli drills list --difficulty beginner --location backyard
//! bravoball-cli drills show 10
//!
//! # List skill display names
//! bravoball-cli skills
//! ```

mod commands;
mod helpers;

use bravoball_server::{
    constants::defaults,
    database::{self, DrillCatalog},
    errors::AppResult,
};
use clap::{Parser, Subcommand};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "bravoball-cli",
    about = "BravoBall training CLI",
    long_about = "Generate training sessions and browse the BravoBall drill catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a training session
    Generate {
        /// Session configuration JSON file
        #[arg(long)]
        config: PathBuf,

        /// Drill catalog JSON file (defaults to the database catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drill catalog commands
    Drills {
        #[command(subcommand)]
        action: DrillCommand,
    },

    /// List skill display names by category
    Skills,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DrillCommand {
    /// List drills with optional filters
    List {
        /// Difficulty (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<String>,

        /// Training location (e.g. `full_field`, backyard)
        #[arg(long)]
        location: Option<String>,

        /// Skill category (e.g. shooting)
        #[arg(long)]
        skill: Option<String>,

        /// Maximum number of drills
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one drill
    Show {
        /// Drill id
        id: u64,
    },

    /// Search drills by title or description
    Search {
        /// Search text
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let database_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    match cli.command {
        Command::Skills => commands::skills::list(),
        Command::Generate {
            config,
            catalog: Some(catalog_path),
            json,
        } => {
            let drills = commands::session::load_catalog_file(&catalog_path).await?;
            commands::session::generate(&config, &drills, json).await?;
        }
        Command::Generate {
            config,
            catalog: None,
            json,
        } => {
            let catalog = open_catalog(&database_url).await?;
            let drills = catalog.load_snapshot().await?;
            commands::session::generate(&config, &drills, json).await?;
        }
        Command::Drills { action } => {
            let catalog = open_catalog(&database_url).await?;
            match action {
                DrillCommand::List {
                    difficulty,
                    location,
                    skill,
                    limit,
                } => {
                    commands::drills::list(&catalog, difficulty, location, skill, limit).await?;
                }
                DrillCommand::Show { id } => commands::drills::show(&catalog, id).await?,
                DrillCommand::Search { query } => commands::drills::search(&catalog, &query).await?,
            }
        }
    }

    Ok(())
}

async fn open_catalog(database_url: &str) -> Result<DrillCatalog> {
    info!("Connecting to database: {}", database_url);
    let pool = database::connect(database_url).await?;
    let catalog = DrillCatalog::new(pool);
    catalog.ensure_schema().await?;
    Ok(catalog)
}
