//! Match configuration, scoring state and derived results

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Outcome};
use crate::error::GameError;

/// Rounds per match unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: u32 = 5;

/// Configuration fixed at session construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    max_rounds: u32,
}

impl MatchConfig {
    pub fn new(max_rounds: u32) -> Result<Self, GameError> {
        if max_rounds == 0 {
            return Err(GameError::InvalidMaxRounds(max_rounds));
        }
        Ok(Self { max_rounds })
    }

    /// Best of five (the default)
    pub fn best_of_five() -> Self {
        Self { max_rounds: DEFAULT_MAX_ROUNDS }
    }

    /// One round per match; scores are only meaningful until the next reset
    pub fn single_round() -> Self {
        Self { max_rounds: 1 }
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::best_of_five()
    }
}

#[derive(Deserialize)]
struct RawMatchConfig {
    #[serde(default = "default_max_rounds")]
    max_rounds: u32,
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = GameError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_rounds)
    }
}

/// Final result of a completed match, from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    PlayerWins,
    OpponentWins,
    MatchDraw,
}

/// Score counters for the current match
///
/// `rounds_played` always equals the sum of the three score counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    player_score: u32,
    opponent_score: u32,
    draw_count: u32,
    rounds_played: u32,
    max_rounds: u32,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            draw_count: 0,
            rounds_played: 0,
            max_rounds: config.max_rounds(),
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn remaining_rounds(&self) -> u32 {
        self.max_rounds - self.rounds_played
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_played >= self.max_rounds
    }

    /// Derived from the current scores; `None` until the match is complete
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_complete() {
            return None;
        }
        let result = match self.player_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => MatchResult::PlayerWins,
            std::cmp::Ordering::Less => MatchResult::OpponentWins,
            std::cmp::Ordering::Equal => MatchResult::MatchDraw,
        };
        Some(result)
    }

    /// Count one resolved round and return its 1-based number.
    ///
    /// Callers check [`MatchState::is_complete`] first.
    pub(crate) fn record(&mut self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.opponent_score += 1,
            Outcome::Draw => self.draw_count += 1,
        }
        self.rounds_played += 1;
        self.rounds_played
    }

    /// Zero the counters; `max_rounds` is kept
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.draw_count = 0;
        self.rounds_played = 0;
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            draw_count: self.draw_count,
            rounds_played: self.rounds_played,
            max_rounds: self.max_rounds,
            is_complete: self.is_complete(),
            result: self.result(),
        }
    }
}

/// Point-in-time copy of the match state handed to the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub player_score: u32,
    pub opponent_score: u32,
    pub draw_count: u32,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub is_complete: bool,
    pub result: Option<MatchResult>,
}

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub player_choice: Choice,
    pub opponent_choice: Choice,
    pub outcome: Outcome,
    pub state: MatchSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_best_of_five() {
        assert_eq!(MatchConfig::default().max_rounds(), 5);
        assert_eq!(MatchConfig::single_round().max_rounds(), 1);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert_eq!(MatchConfig::new(0), Err(GameError::InvalidMaxRounds(0)));
        assert_eq!(MatchConfig::new(3).unwrap().max_rounds(), 3);
    }

    #[test]
    fn test_config_from_json() {
        let config: MatchConfig = serde_json::from_str(r#"{"max_rounds": 7}"#).unwrap();
        assert_eq!(config.max_rounds(), 7);

        let config: MatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_rounds(), DEFAULT_MAX_ROUNDS);

        assert!(serde_json::from_str::<MatchConfig>(r#"{"max_rounds": 0}"#).is_err());
    }

    #[test]
    fn test_record_counts_each_outcome() {
        let mut state = MatchState::new(MatchConfig::default());

        assert_eq!(state.record(Outcome::Win), 1);
        assert_eq!(state.record(Outcome::Lose), 2);
        assert_eq!(state.record(Outcome::Draw), 3);

        assert_eq!(state.player_score(), 1);
        assert_eq!(state.opponent_score(), 1);
        assert_eq!(state.draw_count(), 1);
        assert_eq!(state.rounds_played(), 3);
        assert_eq!(state.remaining_rounds(), 2);
    }

    #[test]
    fn test_result_hidden_until_complete() {
        let mut state = MatchState::new(MatchConfig::new(2).unwrap());
        state.record(Outcome::Win);

        assert!(!state.is_complete());
        assert_eq!(state.result(), None);
        assert_eq!(state.snapshot().result, None);

        state.record(Outcome::Win);
        assert!(state.is_complete());
        assert_eq!(state.result(), Some(MatchResult::PlayerWins));
    }

    #[test]
    fn test_result_strict_comparison() {
        let mut state = MatchState::new(MatchConfig::new(3).unwrap());
        state.record(Outcome::Lose);
        state.record(Outcome::Draw);
        state.record(Outcome::Draw);
        assert_eq!(state.result(), Some(MatchResult::OpponentWins));

        let mut state = MatchState::new(MatchConfig::new(2).unwrap());
        state.record(Outcome::Win);
        state.record(Outcome::Lose);
        assert_eq!(state.result(), Some(MatchResult::MatchDraw));
    }

    #[test]
    fn test_reset_keeps_max_rounds() {
        let mut state = MatchState::new(MatchConfig::new(2).unwrap());
        state.record(Outcome::Win);
        state.record(Outcome::Draw);
        state.reset();

        let snap = state.snapshot();
        assert_eq!(snap.player_score, 0);
        assert_eq!(snap.opponent_score, 0);
        assert_eq!(snap.draw_count, 0);
        assert_eq!(snap.rounds_played, 0);
        assert_eq!(snap.max_rounds, 2);
        assert!(!snap.is_complete);
        assert_eq!(snap.result, None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = MatchState::new(MatchConfig::single_round());
        state.record(Outcome::Lose);

        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["opponent_score"], 1);
        assert_eq!(json["is_complete"], true);
        assert_eq!(json["result"], "OpponentWins");
    }
}
