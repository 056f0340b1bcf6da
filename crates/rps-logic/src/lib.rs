//! Match Logic for rock-paper-scissors
//!
//! Round resolution, match scoring and round history for a best-of-N game
//! against a random opponent. This crate is compiled to:
//! - Native (for the terminal front end)
//! - WASM (for the browser front end)

mod choice;
mod error;
mod game;
mod history;
mod random;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use choice::{Choice, Outcome};
pub use error::GameError;
pub use game::{MatchConfig, MatchResult, MatchSnapshot, MatchState, RoundResult, DEFAULT_MAX_ROUNDS};
pub use history::{HistoryEntry, HistoryLog};
pub use random::{pick_opponent_choice, OpponentSelector, RandomOpponent, ScriptedOpponent};
pub use session::Session;

/// Resolve one round from the player's perspective
pub fn resolve_round(player: Choice, opponent: Choice) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
