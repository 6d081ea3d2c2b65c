//! Hog Simulator - CLI
//!
//! Runs strategy experiments or console-driven variants of the core
//! operations.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use hog_sim::commands::{
    ExperimentConfig, InteractiveError, interactive_targets, run_experiments,
};

#[derive(Parser)]
#[command(
    name = "hog_sim",
    about = "Hog dice game simulator with Monte Carlo strategy experiments",
    version,
    author
)]
struct Cli {
    /// Run a console-driven operation: roll_dice, take_turn, or play
    #[arg(short, long, value_name = "TARGET")]
    interactive: Option<String>,

    /// Run strategy experiments
    #[arg(short, long)]
    run_experiments: bool,

    /// Experiment selector, repeatable: roll-analysis, always-roll-8,
    /// bacon, swap, final (default: final)
    #[arg(short, long = "experiment", value_name = "NAME")]
    experiment: Vec<String>,

    /// Samples per estimate
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,

    /// Seed for reproducible experiment runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(target) = cli.interactive.as_deref() {
        run_interactive(target)
    } else if cli.run_experiments {
        match experiment_config(&cli).and_then(|config| run_experiments(&config)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        }
    } else {
        println!("Nothing to do; pass --interactive <target> or --run-experiments");
        println!("(see --help for the full surface)");
        ExitCode::SUCCESS
    }
}

/// Build the experiment preset from the CLI selectors
fn experiment_config(cli: &Cli) -> Result<ExperimentConfig> {
    if cli.experiment.is_empty() {
        return Ok(ExperimentConfig {
            samples: cli.samples,
            seed: cli.seed,
            ..ExperimentConfig::default()
        });
    }

    let mut config = ExperimentConfig::none(cli.samples, cli.seed);
    for selector in &cli.experiment {
        config
            .enable(selector)
            .map_err(|message| anyhow::anyhow!(message))?;
    }
    Ok(config)
}

/// Resolve and run one interactive target
///
/// Exit code 1 on an unknown target; a closed input stream is an orderly
/// quit with exit code 0.
fn run_interactive(target: &str) -> ExitCode {
    let targets = interactive_targets();
    let Some(handler) = targets.get(target) else {
        println!("To use the -i option, please choose one of these:");
        let mut names: Vec<_> = targets.keys().copied().collect();
        names.sort_unstable();
        for name in names {
            println!("\t{name}");
        }
        return ExitCode::FAILURE;
    };

    match handler() {
        Ok(()) => ExitCode::SUCCESS,
        Err(InteractiveError::Aborted) => {
            println!("\nQuitting interactive test");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
