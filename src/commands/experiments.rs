//! Experiment presets
//!
//! Named selectors decide which experiments run; each can be enabled
//! independently, and the default preset estimates the tuned strategy's win
//! rate.

use anyhow::Result;
use indicatif::ProgressBar;
use std::time::Duration;

use crate::core::dice::{DiceKind, FairDice};
use crate::output::{print_experiments_header, print_roll_analysis, print_win_rate};
use crate::stats::{DEFAULT_SAMPLES, average_win_rate, max_scoring_num_rolls};
use crate::strategy::{AlwaysRoll, BASELINE_NUM_ROLLS, StrategyKind};

/// Which experiments to run, plus shared sampling settings
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Rank roll counts for both dice kinds
    pub roll_analysis: bool,
    /// Win rate of `always-roll-8` against the baseline
    pub always_roll_8: bool,
    /// Win rate of the bacon strategy against the baseline
    pub bacon: bool,
    /// Win rate of the swap strategy against the baseline
    pub swap: bool,
    /// Win rate of the tuned strategy against the baseline
    pub final_strategy: bool,
    /// Samples per estimate
    pub samples: u32,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    /// The shipped preset: only the tuned-strategy win rate
    fn default() -> Self {
        Self {
            roll_analysis: false,
            always_roll_8: false,
            bacon: false,
            swap: false,
            final_strategy: true,
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// All selectors off; callers enable what they need
    #[must_use]
    pub const fn none(samples: u32, seed: Option<u64>) -> Self {
        Self {
            roll_analysis: false,
            always_roll_8: false,
            bacon: false,
            swap: false,
            final_strategy: false,
            samples,
            seed,
        }
    }

    /// Enable the named selector
    ///
    /// Known names: `roll-analysis`, `always-roll-8`, `bacon`, `swap`,
    /// `final`.
    ///
    /// # Errors
    /// Lists the known selector names when `selector` is unknown.
    pub fn enable(&mut self, selector: &str) -> Result<(), String> {
        match selector {
            "roll-analysis" => self.roll_analysis = true,
            "always-roll-8" => self.always_roll_8 = true,
            "bacon" => self.bacon = true,
            "swap" => self.swap = true,
            "final" => self.final_strategy = true,
            other => {
                return Err(format!(
                    "unknown experiment `{other}`; choose from roll-analysis, \
                     always-roll-8, bacon, swap, final"
                ));
            }
        }
        Ok(())
    }
}

/// Run every enabled experiment and print its report
///
/// # Errors
/// Propagates sampling failures: a zero sample count or a strategy
/// precondition violation inside a simulated game.
pub fn run_experiments(config: &ExperimentConfig) -> Result<()> {
    print_experiments_header(config.samples);

    if config.roll_analysis {
        for kind in [DiceKind::SixSided, DiceKind::FourSided] {
            let spinner = experiment_spinner(format!("ranking roll counts for {kind} dice"));
            let mut dice = fair_dice(kind, config.seed);
            let analysis = max_scoring_num_rolls(&mut dice, config.samples)?;
            spinner.finish_and_clear();
            print_roll_analysis(kind, &analysis);
        }
    }

    if config.always_roll_8 {
        report_win_rate(config, "always-roll-8")?;
    }
    if config.bacon {
        report_win_rate(config, "bacon")?;
    }
    if config.swap {
        report_win_rate(config, "swap")?;
    }
    if config.final_strategy {
        report_win_rate(config, "final")?;
    }

    Ok(())
}

/// Estimate and report one strategy's win rate against the baseline
fn report_win_rate(config: &ExperimentConfig, name: &str) -> Result<()> {
    let spinner = experiment_spinner(format!("estimating {name} win rate"));
    let strategy = StrategyKind::from_name(name);
    let baseline = AlwaysRoll::new(BASELINE_NUM_ROLLS);
    let estimate = average_win_rate(&strategy, &baseline, config.samples, config.seed)?;
    spinner.finish_and_clear();

    print_win_rate(name, &estimate);
    Ok(())
}

fn experiment_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn fair_dice(kind: DiceKind, seed: Option<u64>) -> FairDice {
    match seed {
        Some(seed) => FairDice::seeded(kind, seed),
        None => FairDice::new(kind),
    }
}
