//! Opponent choice selection
//!
//! The opponent draws uniformly from the three choices. The random source
//! sits behind [`OpponentSelector`] so a session can be driven by a seeded
//! generator or a fixed script when it has to be reproducible.

use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::choice::Choice;
use crate::error::GameError;

impl Distribution<Choice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}

/// Draw a choice uniformly at random (1/3 each)
pub fn pick_opponent_choice<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    rng.gen()
}

/// Source of the opponent's choice for each round
pub trait OpponentSelector {
    fn pick(&mut self) -> Choice;
}

impl<F: FnMut() -> Choice> OpponentSelector for F {
    fn pick(&mut self) -> Choice {
        self()
    }
}

/// Uniform random opponent
///
/// Defaults to ChaCha8 seeded from OS entropy. Use [`RandomOpponent::seeded`]
/// to replay a session.
#[derive(Clone, Debug)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl RandomOpponent<ChaCha8Rng> {
    pub fn new() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    /// Deterministic: same seed = same sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Default for RandomOpponent<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpponent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OpponentSelector for RandomOpponent<R> {
    fn pick(&mut self) -> Choice {
        pick_opponent_choice(&mut self.rng)
    }
}

/// Opponent that plays a fixed sequence, wrapping around at the end
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(script: impl Into<Vec<Choice>>) -> Result<Self, GameError> {
        let script = script.into();
        if script.is_empty() {
            return Err(GameError::EmptyScript);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Opponent that always plays `choice`
    pub fn always(choice: Choice) -> Self {
        Self { script: vec![choice], cursor: 0 }
    }
}

impl OpponentSelector for ScriptedOpponent {
    fn pick(&mut self) -> Choice {
        let choice = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        choice
    }
}
