use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mj_cli::commands::{clear, insights, log, recent, util};
use mj_cli::{Cli, Commands, Config};
use mj_store::{EventStore, SqliteStore};

/// Load config and open the journal, ensuring the database directory exists.
fn open_store(config_path: Option<&Path>) -> Result<(EventStore<SqliteStore>, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let backend = SqliteStore::open(&config.database_path).context("failed to open database")?;
    let store = EventStore::with_keys(backend, config.store_keys());
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let now = Local::now();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Meal { food, category, at }) => {
            let at = util::resolve_when(at.as_deref(), now.with_timezone(&Utc))?;
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            log::meal(&mut stdout, &mut store, food, *category, at, &now)?;
        }
        Some(Commands::Mood { mood, at }) => {
            let at = util::resolve_when(at.as_deref(), now.with_timezone(&Utc))?;
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            log::mood(&mut stdout, &mut store, *mood, at, &now)?;
        }
        Some(Commands::Recent { limit }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            let limit = limit.unwrap_or(config.recent_limit);
            recent::run(&mut stdout, &store, limit, &now)?;
        }
        Some(Commands::Insights { range, json }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            let insights_config = config
                .insights()
                .context("invalid window_minutes in configuration")?;
            insights::run(&mut stdout, &store, &insights_config, *range, *json, &now)?;
        }
        Some(Commands::Clear { yes }) => {
            let (mut store, _config) = open_store(cli.config.as_deref())?;
            clear::run(&mut stdout, &mut store, *yes)?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
