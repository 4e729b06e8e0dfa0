mod handlers;
mod models;

use crate::handlers::{config, files, manifest};
use crate::models::args::{Cli, Commands};
use crate::models::settings::Settings;

use anyhow::{Context, Result};
use clap::Parser;
use mlproject::common::load_config;
use mlproject::logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings: Settings = load_config(cli.config.as_deref())?;
    let level: LevelFilter = settings
        .logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", settings.logging.level))?;

    let logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level)
        .console(settings.logging.console)
        .path(&settings.logging.dir)
        .init()?;

    tracing::debug!(command = ?cli.command, "Dispatching");

    match cli.command {
        Commands::Mkdirs { quiet, dirs } => files::mkdirs(&dirs, quiet)?,
        Commands::Size { file } => files::size(&file)?,
        Commands::ShowConfig { file, key } => config::show_config(&file, key.as_deref())?,
        Commands::Requirements { file } => manifest::requirements(&file)?,
        Commands::Info { requirements } => manifest::info(requirements.as_deref())?,
    }

    logger.shutdown();
    Ok(())
}
