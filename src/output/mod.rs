//! Terminal output formatting

pub mod display;

pub use display::{print_experiments_header, print_roll_analysis, print_win_rate};
