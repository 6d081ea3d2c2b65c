//! Scoring rules
//!
//! The three special rules of Hog: free bacon for rolling zero dice,
//! hog-wild dice selection, and the swine swap.

use super::dice::DiceKind;

/// Score a player must reach to end the game
pub const GOAL_SCORE: u32 = 100;

/// Combined-score modulus that triggers hog wild
pub const HOG_WILD_MODULUS: u32 = 7;

/// Points for rolling zero dice: one more than the opponent's largest digit
///
/// Only the low two base-10 digits of `opponent_score` contribute; in-game
/// scores stay below [`GOAL_SCORE`] before a turn.
///
/// # Examples
/// ```
/// use hog_sim::core::rules::free_bacon;
///
/// assert_eq!(free_bacon(0), 1);
/// assert_eq!(free_bacon(23), 4);
/// assert_eq!(free_bacon(99), 10);
/// ```
#[inline]
#[must_use]
pub const fn free_bacon(opponent_score: u32) -> u32 {
    let tens = (opponent_score / 10) % 10;
    let ones = opponent_score % 10;
    if tens > ones { tens + 1 } else { ones + 1 }
}

/// Hog wild: four-sided dice when the combined score is a multiple of 7
///
/// # Examples
/// ```
/// use hog_sim::core::dice::DiceKind;
/// use hog_sim::core::rules::select_dice;
///
/// assert_eq!(select_dice(4, 24), DiceKind::FourSided);
/// assert_eq!(select_dice(16, 64), DiceKind::SixSided);
/// assert_eq!(select_dice(0, 0), DiceKind::FourSided);
/// ```
#[inline]
#[must_use]
pub const fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % HOG_WILD_MODULUS == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// Swine swap: exchange the scores when one is exactly double the other
///
/// Returns the pair with `score` first; unchanged when neither score
/// doubles the other.
///
/// # Examples
/// ```
/// use hog_sim::core::rules::swine_swap;
///
/// assert_eq!(swine_swap(12, 24), (24, 12));
/// assert_eq!(swine_swap(24, 12), (24, 12));
/// assert_eq!(swine_swap(10, 21), (10, 21));
/// ```
#[inline]
#[must_use]
pub const fn swine_swap(score: u32, opponent_score: u32) -> (u32, u32) {
    if score * 2 == opponent_score || opponent_score * 2 == score {
        (opponent_score, score)
    } else {
        (score, opponent_score)
    }
}
