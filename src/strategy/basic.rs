//! Fixed and single-rule strategies

use super::{BACON_MARGIN, BASELINE_NUM_ROLLS, Strategy};
use crate::core::rules::free_bacon;

/// Strategy that always rolls the same number of dice
///
/// Ignores both scores.
///
/// # Examples
/// ```
/// use hog_sim::strategy::{AlwaysRoll, Strategy};
///
/// let strategy = AlwaysRoll::new(5);
/// assert_eq!(strategy.num_rolls(0, 0), 5);
/// assert_eq!(strategy.num_rolls(99, 99), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AlwaysRoll {
    count: u32,
}

impl AlwaysRoll {
    /// Fixed-roll-count strategy
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.count
    }
}

/// Take free bacon whenever it is worth at least [`BACON_MARGIN`] points
#[derive(Debug, Clone, Copy, Default)]
pub struct BaconStrategy;

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= BACON_MARGIN {
            0
        } else {
            BASELINE_NUM_ROLLS
        }
    }
}

/// Free bacon when it forces a beneficial swap, or when it meets the bacon
/// margin without handing the opponent a swap
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapStrategy;

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let bacon = free_bacon(opponent_score);
        if (bacon + score) * 2 == opponent_score {
            return 0;
        }
        if bacon + score != 2 * opponent_score && bacon >= BACON_MARGIN {
            return 0;
        }
        BASELINE_NUM_ROLLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_roll_ignores_scores() {
        let strategy = AlwaysRoll::new(5);
        assert_eq!(strategy.num_rolls(0, 0), 5);
        assert_eq!(strategy.num_rolls(99, 99), 5);
        assert_eq!(strategy.num_rolls(17, 4), 5);

        assert_eq!(AlwaysRoll::new(0).num_rolls(50, 50), 0);
    }

    #[test]
    fn bacon_strategy_takes_big_bacon() {
        // Free bacon from 70 is 8, meeting the margin
        assert_eq!(BaconStrategy.num_rolls(50, 70), 0);
    }

    #[test]
    fn bacon_strategy_rolls_baseline_otherwise() {
        // Free bacon from 50 is only 6
        assert_eq!(BaconStrategy.num_rolls(70, 50), BASELINE_NUM_ROLLS);
        assert_eq!(BaconStrategy.num_rolls(0, 0), BASELINE_NUM_ROLLS);
    }

    #[test]
    fn swap_strategy_forces_a_beneficial_swap() {
        // 23 + free_bacon(60) = 30, exactly half of 60
        assert_eq!(SwapStrategy.num_rolls(23, 60), 0);
    }

    #[test]
    fn swap_strategy_avoids_a_harmful_swap() {
        // 27 + free_bacon(18) = 36, double of 18: rolling is safer
        assert_eq!(SwapStrategy.num_rolls(27, 18), BASELINE_NUM_ROLLS);
    }

    #[test]
    fn swap_strategy_takes_big_bacon() {
        // No swap either way, but free_bacon(80) = 9 meets the margin
        assert_eq!(SwapStrategy.num_rolls(50, 80), 0);
    }

    #[test]
    fn swap_strategy_baseline_without_a_reason() {
        assert_eq!(SwapStrategy.num_rolls(12, 12), BASELINE_NUM_ROLLS);
    }
}
