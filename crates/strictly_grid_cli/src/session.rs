//! Line-oriented play session.
//!
//! Reads one command per line, forwards it to the engine as an intent and
//! prints the refreshed read model.

use crate::render::render_view;
use derive_more::{Display, Error};
use derive_new::new;
use std::io::{BufRead, Write};
use strictly_grid::{GameState, Intent};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the engine.
    Intent(Intent),
    /// Print the current view again.
    Show,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Command parsing or validation error.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

const HELP: &str = "Commands:
  <n> | move <n>   play cell (tic-tac-toe) or column (connect four) n
  jump <n>         view the game at step n
  order            toggle move-list order
  show             print the board again
  help             this text
  quit             leave";

fn parse_number(word: Option<&str>, what: &str) -> Result<usize, CommandError> {
    let word = word.ok_or_else(|| CommandError::new(format!("missing {}", what)))?;
    word.parse()
        .map_err(|_| CommandError::new(format!("'{}' is not a valid {}", word, what)))
}

/// Parses one input line.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Show);
    };
    let command = match head.to_lowercase().as_str() {
        "move" | "m" => Command::Intent(Intent::Move(parse_number(words.next(), "target")?)),
        "jump" | "j" => Command::Intent(Intent::JumpTo(parse_number(words.next(), "step")?)),
        "order" | "o" => Command::Intent(Intent::ToggleOrder),
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Intent(Intent::Move(parse_number(Some(head), "target")?)),
    };
    if let Some(extra) = words.next() {
        return Err(CommandError::new(format!("unexpected '{}'", extra)));
    }
    Ok(command)
}

/// Checks an intent against the state before handing it to the engine.
///
/// Jump targets must exist; the engine treats anything else as a
/// programming error.
#[instrument(skip(state))]
pub fn validate(state: &GameState, intent: Intent) -> Result<Intent, CommandError> {
    match intent {
        Intent::JumpTo(step) if step >= state.history().len() => Err(CommandError::new(format!(
            "no step {} (history has steps 0 to {})",
            step,
            state.history().len() - 1
        ))),
        other => Ok(other),
    }
}

/// Interactive session over any line source and sink.
#[derive(Debug, new)]
pub struct Session<R, W> {
    state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Runs until `quit` or end of input, returning the final state.
    #[instrument(skip(self))]
    pub fn run(mut self) -> std::io::Result<GameState> {
        info!("Session started");
        self.print_view()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Show) => self.print_view()?,
                Ok(Command::Intent(intent)) => self.handle(intent)?,
                Err(error) => {
                    warn!(%error, "Bad command");
                    writeln!(self.output, "{}", error.message)?;
                }
            }
        }

        info!(steps = self.state.history().len(), "Session finished");
        Ok(self.state)
    }

    fn handle(&mut self, intent: Intent) -> std::io::Result<()> {
        let intent = match validate(&self.state, intent) {
            Ok(intent) => intent,
            Err(error) => return writeln!(self.output, "{}", error.message),
        };

        self.state = match intent {
            Intent::Move(target) => match self.state.try_move(target) {
                Ok(next) => next,
                Err(reason) => return writeln!(self.output, "Move rejected: {}", reason),
            },
            other => std::mem::take(&mut self.state).apply(other),
        };
        self.print_view()
    }

    fn print_view(&mut self) -> std::io::Result<()> {
        let view = self.state.view();
        writeln!(self.output, "{}", render_view(&view, self.state.variant()))
    }
}

/// Plays `moves` on a fresh game from `config`, then optionally jumps.
///
/// Illegal moves are skipped the way the engine skips them.
#[instrument(skip(config))]
pub fn replay(
    config: &crate::PlayConfig,
    moves: &[usize],
    jump: Option<usize>,
) -> Result<GameState, CommandError> {
    let mut state = GameState::new(config.to_variant());
    if !*config.ascending() {
        state = state.toggle_order();
    }
    state = moves
        .iter()
        .fold(state, |state, &target| state.attempt_move(target));
    if let Some(step) = jump {
        let intent = validate(&state, Intent::JumpTo(step))?;
        state = state.apply(intent);
    }
    Ok(state)
}
