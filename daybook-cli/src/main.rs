mod commands;
mod logging;
mod tui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daybook_core::Daybook;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(version, about = "Organize your days from the terminal: calendar, events and notes")]
struct Cli {
    /// Use this configuration file instead of ~/.config/daybook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use this data directory for the session
    #[arg(short = 'D', long, global = true)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events of a day
    Day {
        /// Day to show, in the configured input format (default: today)
        date: Option<String>,

        /// Number of days to show, starting at DATE
        #[arg(short, long, default_value_t = 1)]
        range: u32,
    },
    /// Show where configuration and data live
    Config,
    /// Convert an old line-oriented configuration file
    ImportConf { path: PathBuf },
    /// Write the configuration in the old line-oriented format
    ExportConf { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut daybook = match &cli.config {
        Some(path) => Daybook::load_from(path)?,
        None => Daybook::load()?,
    };
    if let Some(dir) = cli.directory {
        daybook.set_data_dir(dir);
    }

    let _log_guard = logging::init(&daybook.data_path())?;
    tracing::debug!(data = %daybook.data_path().display(), "starting");

    match cli.command {
        None => tui::run(daybook),
        Some(Commands::Day { date, range }) => commands::day::run(&daybook, date, range),
        Some(Commands::Config) => commands::config::run(&daybook),
        Some(Commands::ImportConf { path }) => commands::import_conf::run(&mut daybook, &path),
        Some(Commands::ExportConf { path }) => commands::export_conf::run(&daybook, &path),
    }
}
