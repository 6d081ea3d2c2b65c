//! The tuned composite strategy
//!
//! An ordered list of (predicate, roll-count) rules evaluated top-down; the
//! first matching rule decides the turn and the baseline applies when none
//! match. The shipped rule list reproduces the tuned policy exactly as it
//! was calibrated, shadowed rules included; see DESIGN.md before changing
//! rule order or predicates.

use super::basic::{BaconStrategy, SwapStrategy};
use super::{BASELINE_NUM_ROLLS, Strategy};
use crate::core::rules::free_bacon;

/// One rule of a tuned policy: a predicate over `(score, opponent_score)`
/// and the roll count to use when it matches
pub struct Rule {
    name: &'static str,
    applies: fn(u32, u32) -> bool,
    rolls: fn(u32, u32) -> u32,
}

impl Rule {
    /// Build a rule from a predicate and a roll-count function
    #[must_use]
    pub const fn new(
        name: &'static str,
        applies: fn(u32, u32) -> bool,
        rolls: fn(u32, u32) -> u32,
    ) -> Self {
        Self {
            name,
            applies,
            rolls,
        }
    }

    /// The rule's name, for reports and tests
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Hand-tuned composite policy over an ordered rule list
///
/// Rules are evaluated top-down; the first whose predicate holds chooses
/// the roll count, and [`BASELINE_NUM_ROLLS`] applies when none match.
pub struct FinalStrategy {
    rules: Vec<Rule>,
}

impl FinalStrategy {
    /// The shipped rule list
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: shipped_rules(),
        }
    }

    /// Policy with a custom rule list
    #[must_use]
    pub const fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Name of the rule that would decide this state, if any
    #[must_use]
    pub fn deciding_rule(&self, score: u32, opponent_score: u32) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(score, opponent_score))
            .map(Rule::name)
    }
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        for rule in &self.rules {
            if (rule.applies)(score, opponent_score) {
                return (rule.rolls)(score, opponent_score);
            }
        }
        BASELINE_NUM_ROLLS
    }
}

/// The calibrated rule list
///
/// `opponent + score % 7` binds as `opponent + (score % 7)`, so the two
/// forced-wild rules only fire when the opponent has no points and the
/// player's score is a multiple of seven.
fn shipped_rules() -> Vec<Rule> {
    vec![
        // Free bacon worth at least 4 is never available here (a zero
        // opponent score yields 1), so the small-roll rule below decides
        // every forced-wild state.
        Rule::new(
            "forced-wild-big-bacon",
            |score, opponent| opponent + score % 7 == 0 && free_bacon(opponent) >= 4,
            |_, _| 0,
        ),
        Rule::new(
            "forced-wild-small-roll",
            |score, opponent| opponent + score % 7 == 0,
            |_, _| 3,
        ),
        Rule::new(
            "trailing-defer-to-bacon",
            |score, opponent| {
                score < opponent && SwapStrategy.num_rolls(score, opponent) == BASELINE_NUM_ROLLS
            },
            |score, opponent| BaconStrategy.num_rolls(score, opponent),
        ),
        Rule::new(
            "trailing-take-swap",
            |score, opponent| score < opponent,
            |_, _| 0,
        ),
        // The two trailing rules above decide every score < opponent
        // state, so these next two never fire.
        Rule::new(
            "trailing-roll-ten-for-swap",
            |score, opponent| score < opponent && (score + 1) * 2 == opponent,
            |_, _| 10,
        ),
        Rule::new(
            "trailing-bacon-for-swap",
            |score, opponent| score < opponent && (free_bacon(opponent) + score) * 2 == opponent,
            |_, _| 0,
        ),
        Rule::new(
            "leading-defer-to-bacon",
            |score, opponent| score > opponent && opponent * 2 != free_bacon(opponent) + score,
            |score, opponent| BaconStrategy.num_rolls(score, opponent),
        ),
        Rule::new(
            "leading-bacon-forces-wild",
            |score, opponent| {
                score > opponent && (free_bacon(opponent) + score + opponent) % 7 == 0
            },
            |_, _| 0,
        ),
        // `opponent + (score + 1) % 7` only vanishes when the opponent has
        // no points, and the defer rule above already claims every
        // zero-opponent leading state.
        Rule::new(
            "leading-roll-ten-forces-wild",
            |score, opponent| score > opponent && opponent + (score + 1) % 7 == 0,
            |_, _| 10,
        ),
        Rule::new(
            "leading-baseline",
            |score, opponent| score > opponent,
            |_, _| BASELINE_NUM_ROLLS,
        ),
        // Shadowed by the leading catch-all above; never fire.
        Rule::new(
            "taper-at-83",
            |score, opponent| {
                score > opponent
                    && score > 82
                    && BaconStrategy.num_rolls(score, opponent) == BASELINE_NUM_ROLLS
            },
            |_, _| 4,
        ),
        Rule::new(
            "taper-at-89",
            |score, opponent| {
                score > opponent
                    && score > 88
                    && BaconStrategy.num_rolls(score, opponent) == BASELINE_NUM_ROLLS
            },
            |_, _| 3,
        ),
        Rule::new(
            "taper-at-94",
            |score, opponent| {
                score > opponent
                    && score > 93
                    && BaconStrategy.num_rolls(score, opponent) == BASELINE_NUM_ROLLS
            },
            |_, _| 2,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_wild_rolls_small() {
        let strategy = FinalStrategy::new();

        // Opponent at zero, own score a multiple of seven
        assert_eq!(strategy.num_rolls(0, 0), 3);
        assert_eq!(strategy.num_rolls(14, 0), 3);
        assert_eq!(
            strategy.deciding_rule(14, 0),
            Some("forced-wild-small-roll")
        );
    }

    #[test]
    fn trailing_defers_to_bacon() {
        let strategy = FinalStrategy::new();

        // Behind at 7:45, no swap angle, free bacon only worth 6
        assert_eq!(strategy.num_rolls(7, 45), BASELINE_NUM_ROLLS);
        assert_eq!(strategy.deciding_rule(7, 45), Some("trailing-defer-to-bacon"));
    }

    #[test]
    fn trailing_takes_the_swap() {
        let strategy = FinalStrategy::new();

        // free_bacon(7) = 8 meets the margin without a harmful swap
        assert_eq!(strategy.num_rolls(5, 7), 0);
        assert_eq!(strategy.deciding_rule(5, 7), Some("trailing-take-swap"));

        // 23 + free_bacon(60) = 30, exactly half of 60
        assert_eq!(strategy.num_rolls(23, 60), 0);
    }

    #[test]
    fn leading_defers_to_bacon() {
        let strategy = FinalStrategy::new();

        assert_eq!(strategy.num_rolls(10, 5), BASELINE_NUM_ROLLS);
        assert_eq!(strategy.deciding_rule(10, 5), Some("leading-defer-to-bacon"));
    }

    #[test]
    fn leading_bacon_forces_hog_wild() {
        let strategy = FinalStrategy::new();

        // free_bacon(21) + 39 = 42 = 2 * 21, and 42 + 21 is a multiple of 7
        assert_eq!(strategy.num_rolls(39, 21), 0);
        assert_eq!(
            strategy.deciding_rule(39, 21),
            Some("leading-bacon-forces-wild")
        );
    }

    #[test]
    fn leading_falls_back_to_baseline() {
        let strategy = FinalStrategy::new();

        // free_bacon(20) + 37 = 40 = 2 * 20, no wild angle left
        assert_eq!(strategy.num_rolls(37, 20), BASELINE_NUM_ROLLS);
        assert_eq!(strategy.deciding_rule(37, 20), Some("leading-baseline"));
    }

    #[test]
    fn taper_rules_stay_shadowed() {
        let strategy = FinalStrategy::new();

        // A live taper would return 2 at 98 points; the leading catch-all
        // answers first. free_bacon(52) + 98 = 104 = 2 * 52, so the defer
        // rule passes, and neither wild angle applies.
        assert_eq!(strategy.num_rolls(98, 52), BASELINE_NUM_ROLLS);
        assert_eq!(strategy.deciding_rule(98, 52), Some("leading-baseline"));
    }

    #[test]
    fn tied_scores_use_the_default_baseline() {
        let strategy = FinalStrategy::new();

        assert_eq!(strategy.num_rolls(12, 12), BASELINE_NUM_ROLLS);
        assert_eq!(strategy.deciding_rule(12, 12), None);
    }

    #[test]
    fn custom_rule_lists_evaluate_top_down() {
        let strategy = FinalStrategy::with_rules(vec![
            Rule::new("never", |_, _| false, |_, _| 9),
            Rule::new("everything", |_, _| true, |_, _| 7),
        ]);

        assert_eq!(strategy.num_rolls(0, 0), 7);
        assert_eq!(strategy.deciding_rule(0, 0), Some("everything"));
    }

    #[test]
    fn shipped_rule_order_is_stable() {
        let strategy = FinalStrategy::new();
        let names: Vec<_> = strategy.rule_names().collect();

        assert_eq!(names.first(), Some(&"forced-wild-big-bacon"));
        assert_eq!(names.last(), Some(&"taper-at-94"));
        assert_eq!(names.len(), 13);
    }
}
