//! Game session: one match state, its history and an opponent

use tracing::{debug, info, warn};

use crate::choice::Choice;
use crate::error::GameError;
use crate::game::{MatchConfig, MatchSnapshot, MatchState, RoundResult};
use crate::history::{HistoryEntry, HistoryLog};
use crate::random::{OpponentSelector, RandomOpponent};
use crate::resolve_round;

/// Owns everything a front end needs to run repeated matches.
///
/// Rounds are resolved one at a time through `&mut self`; there is no
/// shared or global state.
#[derive(Clone, Debug)]
pub struct Session<S = RandomOpponent> {
    state: MatchState,
    history: HistoryLog,
    selector: S,
}

impl Session<RandomOpponent> {
    /// Session against a uniformly random opponent
    pub fn new(config: MatchConfig) -> Self {
        Self::with_selector(config, RandomOpponent::new())
    }
}

impl Default for Session<RandomOpponent> {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl<S: OpponentSelector> Session<S> {
    pub fn with_selector(config: MatchConfig, selector: S) -> Self {
        Self {
            state: MatchState::new(config),
            history: HistoryLog::new(),
            selector,
        }
    }

    /// Play one round against the session's opponent.
    ///
    /// Fails with [`GameError::MatchAlreadyComplete`] once the round limit is
    /// reached; nothing is mutated and no opponent choice is drawn.
    pub fn play_round(&mut self, player: Choice) -> Result<RoundResult, GameError> {
        self.ensure_playable()?;
        let opponent = self.selector.pick();
        Ok(self.apply_round(player, opponent))
    }

    /// Play one round against an opponent choice made elsewhere
    pub fn play_round_against(
        &mut self,
        player: Choice,
        opponent: Choice,
    ) -> Result<RoundResult, GameError> {
        self.ensure_playable()?;
        Ok(self.apply_round(player, opponent))
    }

    /// Zero the scores and round count; history is kept
    pub fn reset_scores(&mut self) {
        self.state.reset();
        info!(history_len = self.history.len(), "scores reset");
    }

    /// Zero the scores and clear the history
    pub fn reset_all(&mut self) {
        self.reset_scores();
        self.history.clear();
        info!("history cleared");
    }

    pub fn state(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    /// Chronological snapshot of every round since the last full reset
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn history_log(&self) -> &HistoryLog {
        &self.history
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.state.is_complete() {
            warn!(
                rounds_played = self.state.rounds_played(),
                "round rejected, match already complete"
            );
            return Err(GameError::MatchAlreadyComplete {
                max_rounds: self.state.max_rounds(),
            });
        }
        Ok(())
    }

    fn apply_round(&mut self, player: Choice, opponent: Choice) -> RoundResult {
        let outcome = resolve_round(player, opponent);
        let round_number = self.state.record(outcome);

        self.history.append(HistoryEntry {
            round_number,
            player_choice: player,
            opponent_choice: opponent,
            outcome,
        });

        debug!(round_number, %player, %opponent, %outcome, "round resolved");

        let state = self.state.snapshot();
        if let Some(result) = state.result {
            info!(
                ?result,
                player_score = state.player_score,
                opponent_score = state.opponent_score,
                draws = state.draw_count,
                "match complete"
            );
        }

        RoundResult {
            round_number,
            player_choice: player,
            opponent_choice: opponent,
            outcome,
            state,
        }
    }
}
