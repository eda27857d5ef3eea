//! Strictly Grid - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use strictly_grid_cli::{Cli, Command, PlayConfig, Session, render_view, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            variant,
            descending,
        } => run_play(config.with_overrides(variant, descending)),
        Command::Replay {
            variant,
            moves,
            jump,
            descending,
            json,
        } => run_replay(config.with_overrides(variant, descending), &moves, jump, json),
    }
}

/// Loads the config file if one was given, defaults otherwise.
#[instrument]
fn load_config(path: Option<&std::path::Path>) -> Result<PlayConfig> {
    match path {
        Some(path) => Ok(PlayConfig::from_file(path)?),
        None => Ok(PlayConfig::default()),
    }
}

/// Runs the interactive session on stdin/stdout.
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_play(config: PlayConfig) -> Result<()> {
    let state = replay(&config, &[], None)?;

    let stdin = io::stdin();
    let session = Session::new(state, stdin.lock(), io::stdout());
    let state = session.run()?;
    info!(status = %state.status_text(), "Goodbye");
    Ok(())
}

/// Replays a move list and prints the resulting view.
#[instrument(skip(config, moves), fields(variant = %config.variant(), moves = moves.len()))]
fn run_replay(config: PlayConfig, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let state = replay(&config, moves, jump)?;
    let view = state.view();

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_view(&view, state.variant()))?;
    }
    Ok(())
}
