//! Choice domain and the beats-relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A choice in rock-paper-scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every variant, in declaration order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The one choice this choice defeats
    pub fn beats_choice(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// The one choice that defeats this choice
    pub fn beaten_by(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// True if `self` defeats `other`
    pub fn beats(self, other: Choice) -> bool {
        self.beats_choice() == other
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = GameError;

    /// Accepts English names, single-letter shorthands and the Spanish names
    /// used by the browser front end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "piedra" => Ok(Choice::Rock),
            "paper" | "p" | "papel" => Ok(Choice::Paper),
            "scissors" | "s" | "tijera" | "tijeras" => Ok(Choice::Scissors),
            _ => Err(GameError::UnknownChoice(s.to_string())),
        }
    }
}

/// Result of a round from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same round seen from the opponent's side
    pub fn inverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_choice_beats_exactly_one() {
        for a in Choice::ALL {
            let wins = Choice::ALL.iter().filter(|b| a.beats(**b)).count();
            let losses = Choice::ALL.iter().filter(|b| b.beats(a)).count();
            assert_eq!(wins, 1, "{} should beat exactly one choice", a);
            assert_eq!(losses, 1, "{} should lose to exactly one choice", a);
        }
    }

    #[test]
    fn test_beats_relation_is_a_cycle() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(!Choice::Rock.beats(Choice::Rock));
    }

    #[test]
    fn test_beaten_by_inverts_beats_choice() {
        for c in Choice::ALL {
            assert_eq!(c.beaten_by().beats_choice(), c);
            assert_eq!(c.beats_choice().beaten_by(), c);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("rock".parse::<Choice>().unwrap(), Choice::Rock);
        assert_eq!(" Paper ".parse::<Choice>().unwrap(), Choice::Paper);
        assert_eq!("S".parse::<Choice>().unwrap(), Choice::Scissors);
        assert_eq!("piedra".parse::<Choice>().unwrap(), Choice::Rock);
        assert_eq!("papel".parse::<Choice>().unwrap(), Choice::Paper);
        assert_eq!("tijera".parse::<Choice>().unwrap(), Choice::Scissors);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lizard".parse::<Choice>().unwrap_err();
        assert_eq!(err, GameError::UnknownChoice("lizard".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for c in Choice::ALL {
            assert_eq!(c.to_string().parse::<Choice>().unwrap(), c);
        }
    }

    #[test]
    fn test_outcome_inverse() {
        assert_eq!(Outcome::Win.inverse(), Outcome::Lose);
        assert_eq!(Outcome::Lose.inverse(), Outcome::Win);
        assert_eq!(Outcome::Draw.inverse(), Outcome::Draw);
    }
}
