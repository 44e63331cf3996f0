use anyhow::{Context, Result};
use antea_core::SessionManager;
use antea_infrastructure::{AnteaPaths, ClientConfig, JsonSessionStore};
use clap::{Parser, Subcommand};
use std::sync::Arc;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "antea")]
#[command(about = "AnteaCore client - anonymous contribution sessions", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Show the current anonymous session (default)
    Show,
    /// Discard the current session; a new one is created on next use
    Clear,
    /// Explain what is and is not collected
    Privacy,
    /// Print the identity headers sent with API requests, as JSON
    Headers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AnteaPaths::from_env().context("Failed to locate the AnteaCore directory")?;
    let config = ClientConfig::load(&paths);
    logging::init_logging(cli.verbose, config.log_level.as_deref());

    let session_file = config.session_file(&paths);
    tracing::debug!("Session record: {:?}", session_file);
    let store = Arc::new(JsonSessionStore::new(session_file));
    let manager = SessionManager::new(store);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::session::show(&manager, &config)?,
        Commands::Clear => commands::session::clear(&manager)?,
        Commands::Privacy => commands::privacy::print(),
        Commands::Headers => commands::session::headers(&manager)?,
    }

    Ok(())
}
