//! Strictly Grid CLI - terminal front end for the grid engine
//!
//! The engine in `strictly_grid` knows nothing about rendering. This crate
//! is the presentation layer: it loads configuration, turns typed lines
//! into intents, and prints the engine's read model as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use render::{render_board, render_moves, render_view};
pub use session::{
    Command as SessionCommand, CommandError, Session, parse_command, replay, validate,
};
