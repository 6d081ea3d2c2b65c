//! Console-driven variants of the core operations
//!
//! Each handler substitutes the console for the dice source or the
//! strategies, mirroring the programmatic API. Targets are resolved through
//! an enumerated dispatch table.

use rustc_hash::FxHashMap;
use std::fmt;
use std::io::{self, Write};

use crate::core::dice::TestDice;
use crate::core::rules::{GOAL_SCORE, swine_swap};
use crate::core::turn::{InvalidArgument, MAX_ROLLS, roll_dice, take_turn};
use crate::game::Player;

/// A named console-driven handler
pub type Handler = fn() -> Result<(), InteractiveError>;

/// Why an interactive session ended early
#[derive(Debug)]
pub enum InteractiveError {
    /// The input stream closed; the session ends quietly
    Aborted,
    /// Console I/O failed
    Io(io::Error),
    /// The driven operation rejected its inputs
    Rule(InvalidArgument),
}

impl fmt::Display for InteractiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => write!(f, "input closed"),
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::Rule(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InteractiveError {}

impl From<io::Error> for InteractiveError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<InvalidArgument> for InteractiveError {
    fn from(err: InvalidArgument) -> Self {
        Self::Rule(err)
    }
}

/// Enumerated dispatch table from target name to handler
///
/// The three targets mirror the operations a player can drive by hand:
/// `roll_dice`, `take_turn`, and `play`.
#[must_use]
pub fn interactive_targets() -> FxHashMap<&'static str, Handler> {
    let mut targets: FxHashMap<&'static str, Handler> = FxHashMap::default();
    targets.insert("roll_dice", roll_dice_interactive as Handler);
    targets.insert("take_turn", take_turn_interactive as Handler);
    targets.insert("play", play_interactive as Handler);
    targets
}

/// Roll a turn with die outcomes typed at the console
fn roll_dice_interactive() -> Result<(), InteractiveError> {
    let num_rolls = get_int("Number of rolls", 1)?;
    let mut dice = prompt_outcomes(num_rolls)?;

    let turn_total = roll_dice(num_rolls, &mut dice)?;
    println!("Turn total: {turn_total}");
    Ok(())
}

/// Resolve one full turn with console outcomes
fn take_turn_interactive() -> Result<(), InteractiveError> {
    let num_rolls = get_int("Number of rolls", 0)?;
    let opponent_score = get_int("Opponent score", 0)?;

    let turn_total = console_turn(num_rolls, opponent_score)?;
    println!("Turn total: {turn_total}");
    Ok(())
}

/// Play a full game with both seats and every die driven by the console
fn play_interactive() -> Result<(), InteractiveError> {
    let mut score0 = 0;
    let mut score1 = 0;
    let mut turn = Player::Zero;

    while score0 < GOAL_SCORE && score1 < GOAL_SCORE {
        let (own, opponent) = match turn {
            Player::Zero => (score0, score1),
            Player::One => (score1, score0),
        };
        println!("{own} vs. {opponent}");

        let prompt = format!("Number of rolls for Player {}", turn.index());
        let num_rolls = get_int(&prompt, 0)?;
        let delta = console_turn(num_rolls, opponent)?;

        match turn {
            Player::Zero => score0 += delta,
            Player::One => score1 += delta,
        }
        (score0, score1) = swine_swap(score0, score1);
        turn = turn.other();
    }

    println!("Final scores: {score0} to {score1}");
    Ok(())
}

/// Resolve a turn, prompting for outcomes only when dice will be rolled
fn console_turn(num_rolls: u32, opponent_score: u32) -> Result<u32, InteractiveError> {
    if num_rolls == 0 || num_rolls > MAX_ROLLS || opponent_score >= GOAL_SCORE {
        // The free-bacon and error paths never roll
        let mut unused = TestDice::new([1]);
        Ok(take_turn(num_rolls, opponent_score, &mut unused)?)
    } else {
        let mut dice = prompt_outcomes(num_rolls)?;
        Ok(take_turn(num_rolls, opponent_score, &mut dice)?)
    }
}

/// Read `num_rolls` die outcomes into a replayable source
fn prompt_outcomes(num_rolls: u32) -> Result<TestDice, InteractiveError> {
    let mut outcomes = Vec::with_capacity(num_rolls as usize);
    for _ in 0..num_rolls {
        outcomes.push(get_int("Result of dice roll", 1)?);
    }
    Ok(TestDice::new(outcomes))
}

/// Prompt for an integer of at least `min`, re-prompting on bad input
fn get_int(prompt: &str, min: u32) -> Result<u32, InteractiveError> {
    loop {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(InteractiveError::Aborted);
        }
        match line.trim().parse::<u32>() {
            Ok(value) if value >= min => return Ok(value),
            _ => println!("Please enter an integer greater than or equal to {min}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table_lists_the_three_targets() {
        let targets = interactive_targets();

        assert_eq!(targets.len(), 3);
        assert!(targets.contains_key("roll_dice"));
        assert!(targets.contains_key("take_turn"));
        assert!(targets.contains_key("play"));
    }

    #[test]
    fn dispatch_table_rejects_unknown_targets() {
        let targets = interactive_targets();

        assert!(!targets.contains_key("run_experiments"));
        assert!(!targets.contains_key(""));
    }

    #[test]
    fn interactive_error_wraps_rule_violations() {
        let err = InteractiveError::from(InvalidArgument::TooManyRolls(11));
        assert!(matches!(err, InteractiveError::Rule(_)));
        assert_eq!(err.to_string(), "cannot roll 11 dice, the limit is 10");
    }
}
