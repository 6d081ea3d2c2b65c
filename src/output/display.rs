//! Terminal reports for experiment results

use colored::Colorize;

use crate::core::dice::DiceKind;
use crate::stats::{RollAnalysis, WinRateEstimate};

/// Banner above an experiment run
pub fn print_experiments_header(samples: u32) {
    println!("\n{}", "═".repeat(62));
    println!(" Hog strategy experiments ");
    println!("{}", "═".repeat(62));
    println!("\nSamples per estimate: {samples}");
}

/// Report the averaged turn score for each roll count
pub fn print_roll_analysis(kind: DiceKind, analysis: &RollAnalysis) {
    println!(
        "\n📊 {}",
        format!("Turn score by roll count, {kind} dice")
            .bright_cyan()
            .bold()
    );

    let max_average = analysis
        .averages
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    for (i, average) in analysis.averages.iter().enumerate() {
        let num_rolls = i + 1;
        let bar_len = if max_average > 0.0 {
            ((average / max_average) * 40.0).round() as usize
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {num_rolls:>2} dice: {bar} {average:6.3}");
    }

    println!(
        "  Best roll count: {}",
        analysis.best_num_rolls.to_string().bright_yellow().bold()
    );
}

/// Report a strategy's estimated win rate against the baseline
pub fn print_win_rate(name: &str, estimate: &WinRateEstimate) {
    println!(
        "\n🏆 {}",
        format!("{name} vs. baseline").bright_cyan().bold()
    );
    println!("  As player 0:      {:.3}", estimate.as_player_zero);
    println!("  As player 1:      {:.3}", estimate.as_player_one);

    let overall = estimate.overall();
    let formatted = format!("{overall:.3}");
    let colored_rate = if overall >= 0.55 {
        formatted.bright_green().bold()
    } else if overall >= 0.5 {
        formatted.yellow()
    } else {
        formatted.red()
    };
    println!("  Overall win rate: {colored_rate}");
}
