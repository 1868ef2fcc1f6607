//! Strictly Rewind - terminal front end
//!
//! Plays tic-tac-toe in the terminal with a move list that can jump back to
//! any earlier board, or replays a scripted session headlessly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_logging(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { cells, jump, json } => {
            logging::init_stderr_logging(&config);
            replay::run(&cells, jump, json, &mut std::io::stdout().lock())
        }
    }
}
