//! Expected turn score by roll count

use super::sampling::make_averaged;
use crate::core::dice::Dice;
use crate::core::turn::{InvalidArgument, MAX_ROLLS, roll_dice};

/// Averaged turn score for each roll count from 1 to [`MAX_ROLLS`]
#[derive(Debug, Clone)]
pub struct RollAnalysis {
    /// `averages[i]` is the estimated turn score for `i + 1` rolls
    pub averages: Vec<f64>,
    /// Roll count with the strictly highest average; the lower count wins
    /// ties
    pub best_num_rolls: u32,
}

impl RollAnalysis {
    /// Estimated average turn score for `num_rolls` dice
    #[must_use]
    pub fn average_for(&self, num_rolls: u32) -> Option<f64> {
        if num_rolls == 0 {
            return None;
        }
        self.averages.get(num_rolls as usize - 1).copied()
    }
}

/// Estimate the best roll count for the given dice
///
/// Averages [`roll_dice`] over `num_samples` turns for each roll count from
/// 1 to [`MAX_ROLLS`] and picks the count with the strictly highest
/// average. On ties the lower roll count wins, per the `1..=10` scan order.
///
/// # Errors
/// Returns [`InvalidArgument::NoSamples`] when `num_samples` is 0.
pub fn max_scoring_num_rolls(
    dice: &mut dyn Dice,
    num_samples: u32,
) -> Result<RollAnalysis, InvalidArgument> {
    let mut averages = Vec::with_capacity(MAX_ROLLS as usize);
    let mut best_num_rolls = 1;
    let mut best_average = f64::NEG_INFINITY;

    for num_rolls in 1..=MAX_ROLLS {
        let mut averaged = make_averaged(
            // Safe to expect: the loop range keeps num_rolls at least 1
            || f64::from(roll_dice(num_rolls, &mut *dice).expect("roll count is at least 1")),
            num_samples,
        )?;
        let average = averaged();

        if average > best_average {
            best_average = average;
            best_num_rolls = num_rolls;
        }
        averages.push(average);
    }

    Ok(RollAnalysis {
        averages,
        best_num_rolls,
    })
}
