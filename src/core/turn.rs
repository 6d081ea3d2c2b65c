//! Turn resolution
//!
//! Rolling a turn's dice and resolving the zero-roll free-bacon case.

use super::dice::Dice;
use super::rules::{GOAL_SCORE, free_bacon};
use std::fmt;

/// Most dice a player may roll in one turn
pub const MAX_ROLLS: u32 = 10;

/// Precondition violation in a core operation
///
/// These are programming errors in the caller (an out-of-range roll count is
/// a broken strategy, not a recoverable game state); they fail fast and
/// abort any enclosing simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A rolled turn needs at least one die
    NoRolls,
    /// Roll count above [`MAX_ROLLS`]
    TooManyRolls(u32),
    /// The opponent already reached the goal; no turn should be taken
    GameAlreadyOver(u32),
    /// An average over zero samples is undefined
    NoSamples,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRolls => write!(f, "must roll at least one die"),
            Self::TooManyRolls(rolls) => {
                write!(f, "cannot roll {rolls} dice, the limit is {MAX_ROLLS}")
            }
            Self::GameAlreadyOver(score) => {
                write!(f, "opponent already reached {score} points, the game is over")
            }
            Self::NoSamples => write!(f, "sample count must be at least 1"),
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Roll `num_rolls` dice and score the turn
///
/// The dice source is consulted exactly `num_rolls` times with no
/// short-circuit. If any outcome is 1 the turn scores exactly 1 (pig out);
/// otherwise it scores the sum of the outcomes.
///
/// # Errors
/// Returns [`InvalidArgument::NoRolls`] when `num_rolls` is 0.
pub fn roll_dice(num_rolls: u32, dice: &mut dyn Dice) -> Result<u32, InvalidArgument> {
    if num_rolls == 0 {
        return Err(InvalidArgument::NoRolls);
    }

    let mut sum = 0;
    let mut pig_out = false;
    for _ in 0..num_rolls {
        let outcome = dice.roll();
        if outcome == 1 {
            pig_out = true;
        }
        sum += outcome;
    }

    if pig_out { Ok(1) } else { Ok(sum) }
}

/// Resolve one player's full turn
///
/// Zero rolls takes free bacon from the opponent's score and never consults
/// the dice source; otherwise the turn is rolled via [`roll_dice`].
///
/// # Errors
/// Returns [`InvalidArgument::TooManyRolls`] when `num_rolls` exceeds
/// [`MAX_ROLLS`], and [`InvalidArgument::GameAlreadyOver`] when
/// `opponent_score` has already reached [`GOAL_SCORE`].
pub fn take_turn(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut dyn Dice,
) -> Result<u32, InvalidArgument> {
    if num_rolls > MAX_ROLLS {
        return Err(InvalidArgument::TooManyRolls(num_rolls));
    }
    if opponent_score >= GOAL_SCORE {
        return Err(InvalidArgument::GameAlreadyOver(opponent_score));
    }

    if num_rolls == 0 {
        Ok(free_bacon(opponent_score))
    } else {
        roll_dice(num_rolls, dice)
    }
}
