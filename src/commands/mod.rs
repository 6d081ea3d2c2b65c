//! Command implementations

pub mod experiments;
pub mod interactive;

pub use experiments::{ExperimentConfig, run_experiments};
pub use interactive::{Handler, InteractiveError, interactive_targets};
