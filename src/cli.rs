//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use tictactoe_engine::{Board, Player};

/// Tic-tac-toe engine with exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an optimal engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the engine configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Side to play (X moves first); overrides the config file
        #[arg(long)]
        human: Option<Player>,
    },

    /// Suggest a move for a position
    Suggest {
        /// Nine cells in row-major order: X, O, or . for empty
        #[arg(short, long)]
        board: Board,

        /// Player to move
        #[arg(short, long)]
        player: Player,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    Selfplay,
}
