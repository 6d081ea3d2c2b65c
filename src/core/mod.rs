//! Core domain types
//!
//! Dice sources, the scoring rules, and single-turn resolution.

pub mod dice;
pub mod rules;
pub mod turn;

pub use dice::{Dice, DiceKind, DiceSupply, FairDice, FairDiceSupply, ScriptedDiceSupply, TestDice};
pub use rules::{GOAL_SCORE, HOG_WILD_MODULUS, free_bacon, select_dice, swine_swap};
pub use turn::{InvalidArgument, MAX_ROLLS, roll_dice, take_turn};
