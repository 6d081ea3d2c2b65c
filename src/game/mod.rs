//! Full-game simulation
//!
//! Alternates turns between two strategies until either score reaches the
//! goal.

use crate::core::dice::DiceSupply;
use crate::core::rules::{GOAL_SCORE, select_dice, swine_swap};
use crate::core::turn::{InvalidArgument, take_turn};
use crate::strategy::Strategy;

/// One of the two players, by seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first
    Zero,
    /// Moves second
    One,
}

impl Player {
    /// The opposing seat
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Seat number, 0 or 1
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Simulate a full game and return the final `(score0, score1)` pair
///
/// Turns alternate strictly, starting with player zero. Each turn selects
/// the dice kind from the pre-turn scores (hog wild), resolves the turn via
/// [`take_turn`], adds the delta to the active player's score, then applies
/// the swine swap. The loop ends the first time either score reaches
/// `goal`.
///
/// # Errors
/// Propagates [`InvalidArgument`] when a strategy asks for an out-of-range
/// roll count; the simulation aborts.
pub fn play(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut dyn DiceSupply,
    goal: u32,
) -> Result<(u32, u32), InvalidArgument> {
    let mut score0 = 0;
    let mut score1 = 0;
    let mut turn = Player::Zero;

    while score0 < goal && score1 < goal {
        let kind = select_dice(score0, score1);
        match turn {
            Player::Zero => {
                let num_rolls = strategy0.num_rolls(score0, score1);
                score0 += take_turn(num_rolls, score1, dice.dice(kind))?;
            }
            Player::One => {
                let num_rolls = strategy1.num_rolls(score1, score0);
                score1 += take_turn(num_rolls, score0, dice.dice(kind))?;
            }
        }
        (score0, score1) = swine_swap(score0, score1);
        turn = turn.other();
    }

    Ok((score0, score1))
}

/// Play one game to [`GOAL_SCORE`] and name the winner
///
/// Ties go to player one: [`Player::Zero`] wins only when their final score
/// is strictly greater.
///
/// # Errors
/// Propagates [`InvalidArgument`] from the underlying game.
pub fn winner(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut dyn DiceSupply,
) -> Result<Player, InvalidArgument> {
    let (score0, score1) = play(strategy0, strategy1, dice, GOAL_SCORE)?;
    if score0 > score1 {
        Ok(Player::Zero)
    } else {
        Ok(Player::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{FairDiceSupply, ScriptedDiceSupply};
    use crate::strategy::AlwaysRoll;

    #[test]
    fn player_alternation_helpers() {
        assert_eq!(Player::Zero.other(), Player::One);
        assert_eq!(Player::One.other(), Player::Zero);
        assert_eq!(Player::Zero.index(), 0);
        assert_eq!(Player::One.index(), 1);
    }

    #[test]
    fn play_alternates_and_terminates() {
        // One die per turn over the cycle [3, 4]: player zero always draws
        // 3, player one always draws 4, and no state hits a swap. Scores
        // run (3,0), (3,4), (6,4), (6,8), (9,8), (9,12).
        let s = AlwaysRoll::new(1);
        let mut dice = ScriptedDiceSupply::new([3, 4]);

        let (score0, score1) = play(&s, &s, &mut dice, 10).unwrap();
        assert_eq!((score0, score1), (9, 12));
    }

    #[test]
    fn play_applies_swine_swap_before_the_goal_check() {
        // Scores run 4:0, 4:4, then 8:4 swaps to 4:8, which ends the game
        // at a goal of 8 with the swapped pair.
        let s = AlwaysRoll::new(1);
        let mut dice = ScriptedDiceSupply::new([4]);

        let (score0, score1) = play(&s, &s, &mut dice, 8).unwrap();
        assert_eq!((score0, score1), (4, 8));
    }

    #[test]
    fn play_reaches_the_goal_with_fair_dice() {
        let s = AlwaysRoll::new(5);
        let mut dice = FairDiceSupply::seeded(42);

        let (score0, score1) = play(&s, &s, &mut dice, GOAL_SCORE).unwrap();
        assert!(score0.max(score1) >= GOAL_SCORE);
    }

    #[test]
    fn play_aborts_on_an_out_of_range_strategy() {
        let broken = AlwaysRoll::new(11);
        let sane = AlwaysRoll::new(5);
        let mut dice = ScriptedDiceSupply::new([6]);

        let result = play(&broken, &sane, &mut dice, GOAL_SCORE);
        assert_eq!(result, Err(InvalidArgument::TooManyRolls(11)));
    }

    #[test]
    fn winner_is_consistent_with_play() {
        let s0 = AlwaysRoll::new(3);
        let s1 = AlwaysRoll::new(4);
        let outcomes = [6, 5, 4, 3, 2, 6, 6, 5, 4, 2];

        let (score0, score1) = play(
            &s0,
            &s1,
            &mut ScriptedDiceSupply::new(outcomes),
            GOAL_SCORE,
        )
        .unwrap();
        let won = winner(&s0, &s1, &mut ScriptedDiceSupply::new(outcomes)).unwrap();

        assert_eq!(won == Player::Zero, score0 > score1);
    }
}
