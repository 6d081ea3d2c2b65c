//! Monte Carlo estimation
//!
//! Repeated-sampling averages, roll-count ranking, and strategy win rates.

pub mod analysis;
pub mod sampling;
pub mod winrate;

pub use analysis::{RollAnalysis, max_scoring_num_rolls};
pub use sampling::{DEFAULT_SAMPLES, make_averaged};
pub use winrate::{WinRateEstimate, average_win_rate};
