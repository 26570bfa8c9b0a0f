//! Command line drivers for the rowhouse stores.
//!
//! # Responsibility
//! - Parse subcommands, open the shared database file once and hand the
//!   connection to the per-store command modules.
//! - Resolve environment configuration (`.env`, `ROWHOUSE_*`) before any
//!   core call runs.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use commands::{arcade, kennel, storefront, tasks};

#[derive(Parser)]
#[command(name = "rowhouse")]
#[command(about = "Tasks, kennel, arcade and storefront over one SQLite file", long_about = None)]
struct Cli {
    /// Database file; defaults to ROWHOUSE_DB, then rowhouse.db.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// To-do list over the tasks store.
    Tasks {
        #[command(subcommand)]
        action: tasks::TasksAction,
    },
    /// Dog registry over the kennel store.
    Kennel {
        #[command(subcommand)]
        action: kennel::KennelAction,
    },
    /// Game catalog and sales reports over the arcade store.
    Arcade {
        #[command(subcommand)]
        action: arcade::ArcadeAction,
    },
    /// Order import and join reports over the storefront store.
    Storefront {
        #[command(subcommand)]
        action: storefront::StorefrontAction,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // File logging only runs when asked for; a bare invocation stays quiet.
    if let Ok(log_dir) = std::env::var("ROWHOUSE_LOG_DIR") {
        let level = std::env::var("ROWHOUSE_LOG_LEVEL")
            .unwrap_or_else(|_| rowhouse_core::default_log_level().to_string());
        rowhouse_core::init_logging(&level, &log_dir).map_err(anyhow::Error::msg)?;
    }

    let db_path = cli
        .db
        .or_else(|| std::env::var_os("ROWHOUSE_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("rowhouse.db"));
    let conn = rowhouse_core::open_db(&db_path)
        .with_context(|| format!("cannot open database at {}", db_path.display()))?;

    match cli.command {
        Commands::Tasks { action } => tasks::run(&conn, action),
        Commands::Kennel { action } => kennel::run(&conn, action),
        Commands::Arcade { action } => arcade::run(&conn, action),
        Commands::Storefront { action } => storefront::run(&conn, action),
    }
}
