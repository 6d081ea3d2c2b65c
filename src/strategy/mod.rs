//! Roll-count strategies
//!
//! A strategy maps the current score pair to the number of dice to roll
//! this turn.

mod basic;
mod tuned;

pub use basic::{AlwaysRoll, BaconStrategy, SwapStrategy};
pub use tuned::{FinalStrategy, Rule};

/// Default roll count when no special rule applies
pub const BASELINE_NUM_ROLLS: u32 = 5;

/// Free-bacon point threshold worth giving up a rolled turn for
pub const BACON_MARGIN: u32 = 8;

/// A roll-count policy
///
/// Takes the current player's score and the opponent's score; returns how
/// many dice to roll this turn, in `0..=10`.
pub trait Strategy {
    /// Choose the roll count for this turn
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

/// Enum wrapper over the shipped strategies
///
/// Allows runtime selection by name while keeping static dispatch inside
/// each variant.
pub enum StrategyKind {
    /// Fixed roll count
    AlwaysRoll(AlwaysRoll),
    /// Free bacon when the margin is met
    Bacon(BaconStrategy),
    /// Swap-aware free bacon
    Swap(SwapStrategy),
    /// The tuned composite policy
    Final(FinalStrategy),
}

impl Strategy for StrategyKind {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        match self {
            Self::AlwaysRoll(s) => s.num_rolls(score, opponent_score),
            Self::Bacon(s) => s.num_rolls(score, opponent_score),
            Self::Swap(s) => s.num_rolls(score, opponent_score),
            Self::Final(s) => s.num_rolls(score, opponent_score),
        }
    }
}

impl StrategyKind {
    /// Create a strategy from a name
    ///
    /// Supported names: `always-roll-N` (N a roll count), `bacon`, `swap`,
    /// `final`. Unrecognized names default to `final`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if let Some(count) = name.strip_prefix("always-roll-")
            && let Ok(count) = count.parse()
        {
            return Self::AlwaysRoll(AlwaysRoll::new(count));
        }
        match name {
            "bacon" => Self::Bacon(BaconStrategy),
            "swap" => Self::Swap(SwapStrategy),
            _ => Self::Final(FinalStrategy::default()),
        }
    }
}
