//! Command-line front end for the tablero stores.
//!
//! # Responsibility
//! - Map subcommands onto repertoire/message store operations.
//! - Print the rendered panel markup after each command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use tablero_core::db::open_db;
use tablero_core::{
    default_log_level, init_logging, AddItemForm, AddItemModal, AppConfig, ItemKind, ListStore,
    MemoryRenderTarget, MessageStore, SqliteKeyValueStorage, StaticIdentity, StoreOptions,
};

#[derive(Parser)]
#[command(name = "tablero")]
#[command(about = "Repertoire and messages kept in local storage", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// SQLite file holding the storage area
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Sender identity for outgoing messages
    #[arg(long, global = true)]
    user: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Personal repertoire
    Repertoire {
        #[command(subcommand)]
        action: RepertoireAction,
    },
    /// Messaging panel
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
}

#[derive(Subcommand)]
enum RepertoireAction {
    /// Add an entry through the add-item modal
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Render the repertoire
    List,
}

#[derive(Subcommand)]
enum MessagesAction {
    /// Send a message
    Send {
        #[arg(long)]
        to: String,
        #[arg(long)]
        text: String,
    },
    /// Render the message panel
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    start_logging(&config);

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.resolved_db_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let conn = open_db(&db_path)
        .with_context(|| format!("Failed to open storage at {}", db_path.display()))?;
    let storage = SqliteKeyValueStorage::new(&conn);
    let options = StoreOptions::default().with_dates(config.date_display()?);

    match cli.command {
        Command::Repertoire { action } => {
            let mut store = ListStore::load_with(&storage, MemoryRenderTarget::new(), options)?;
            if let Some(issue) = store.load_issue() {
                eprintln!("warning: {issue}");
            }
            if let RepertoireAction::Add { title, description } = action {
                let mut modal = AddItemModal::new(&mut store);
                modal.open(ItemKind::Repertoire);
                let notification = modal.submit(AddItemForm { title, description })?;
                eprintln!("{}", notification.message);
            }
            print!("{}", store.target().content());
        }
        Command::Messages { action } => {
            let identity = StaticIdentity::from(cli.user.or(config.current_user.clone()));
            let mut store =
                MessageStore::load_with(&storage, MemoryRenderTarget::new(), identity, options)?;
            if let Some(issue) = store.load_issue() {
                eprintln!("warning: {issue}");
            }
            if let MessagesAction::Send { to, text } = action {
                store.send(&to, &text)?;
            }
            print!("{}", store.target().content());
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match AppConfig::default_path() {
            Some(path) => path,
            None => return Ok(AppConfig::default()),
        },
    };
    AppConfig::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

fn start_logging(config: &AppConfig) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = match config.resolved_log_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            return;
        }
    };
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
        return;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        tablero_core::core_version()
    );
}
