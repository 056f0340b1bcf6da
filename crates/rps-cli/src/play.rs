//! Interactive command loop
//!
//! Reads one command per line and renders the session after each one.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use rps_logic::{Choice, GameError, HistoryEntry, MatchSnapshot, OpponentSelector, Session};

use crate::render;

/// A line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Choice),
    ResetScores,
    ResetAll,
    History,
    State,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, GameError> {
        let command = match line.trim().to_lowercase().as_str() {
            "" => return Ok(None),
            "reset" => Command::ResetScores,
            "reset-all" | "resetall" => Command::ResetAll,
            "history" | "h" => Command::History,
            "state" | "score" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Play(other.parse()?),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "Commands: rock | paper | scissors (r/p/s), reset, reset-all, history, state, quit";

/// Final session dump for `--json`
#[derive(Serialize)]
pub struct SessionReport {
    pub state: MatchSnapshot,
    pub history: Vec<HistoryEntry>,
}

pub fn run<S, R, W>(session: &mut Session<S>, input: R, output: &mut W) -> Result<()>
where
    S: OpponentSelector,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Best of {}. {}",
        session.state().max_rounds,
        HELP
    )?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Play(choice) => match session.play_round(choice) {
                Ok(round) => writeln!(output, "{}", render::round_report(&round))?,
                Err(GameError::MatchAlreadyComplete { .. }) => writeln!(
                    output,
                    "The match is over. Reset the scores to play again."
                )?,
                Err(err) => writeln!(output, "{}", err)?,
            },
            Command::ResetScores => {
                session.reset_scores();
                writeln!(
                    output,
                    "Scores reset. Start a new best-of-{} match.",
                    session.state().max_rounds
                )?;
            }
            Command::ResetAll => {
                session.reset_all();
                writeln!(output, "Scores reset. History cleared.")?;
            }
            Command::History => writeln!(output, "{}", render::history(session.history_log()))?,
            Command::State => writeln!(output, "{}", render::scoreboard(&session.state()))?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

pub fn report<S: OpponentSelector>(session: &Session<S>) -> SessionReport {
    SessionReport {
        state: session.state(),
        history: session.history(),
    }
}
