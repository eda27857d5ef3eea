//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_grid::VariantKind;

/// Strictly Grid - tic-tac-toe and connect four with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two-player grid games with a branchable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play {
        /// Variant to play (tic-tac-toe, connect-four); overrides the config file
        #[arg(short, long)]
        variant: Option<VariantKind>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Variant to play (tic-tac-toe, connect-four); overrides the config file
        #[arg(short, long)]
        variant: Option<VariantKind>,

        /// Comma-separated cells (tic-tac-toe) or columns (connect four)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the read model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
