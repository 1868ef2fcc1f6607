//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Click the given cells on a new game and print the result
    Replay {
        /// Cell indices (0-8, row-major) to click in order
        cells: Vec<usize>,

        /// History step to jump to after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["strictly_rewind"]).expect("valid args");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "strictly_rewind",
            "replay",
            "0",
            "1",
            "3",
            "--jump",
            "1",
            "--config",
            "custom.toml",
        ])
        .expect("valid args");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                cells: vec![0, 1, 3],
                jump: Some(1),
                json: false,
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_rejects_non_numeric_cell() {
        assert!(Cli::try_parse_from(["strictly_rewind", "replay", "center"]).is_err());
    }
}
