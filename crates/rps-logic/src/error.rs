//! Error type for match play and configuration

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The match has reached its round limit; reset before playing again.
    #[error("Match already complete after {max_rounds} rounds - reset the scores to play again")]
    MatchAlreadyComplete { max_rounds: u32 },

    #[error("max_rounds must be at least 1, got {0}")]
    InvalidMaxRounds(u32),

    #[error("Unknown choice: {0:?} (expected rock, paper or scissors)")]
    UnknownChoice(String),

    #[error("Scripted opponent needs at least one choice")]
    EmptyScript,
}
