//! Hog Simulator
//!
//! Simulates the two-player dice game Hog and compares scripted playing
//! strategies by Monte Carlo estimation of their win rates.
//!
//! # Quick Start
//!
//! ```rust
//! use hog_sim::core::{GOAL_SCORE, ScriptedDiceSupply};
//! use hog_sim::game::play;
//! use hog_sim::strategy::AlwaysRoll;
//!
//! let mut dice = ScriptedDiceSupply::new([6, 6, 6, 5]);
//! let strategy = AlwaysRoll::new(2);
//!
//! let (score0, score1) = play(&strategy, &strategy, &mut dice, GOAL_SCORE).unwrap();
//! assert!(score0.max(score1) >= GOAL_SCORE);
//! ```

// Core domain types
pub mod core;

// Full-game simulation
pub mod game;

// Roll-count strategies
pub mod strategy;

// Monte Carlo estimation
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
