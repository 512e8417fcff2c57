//! Command-line driver: deck demo and Monte Carlo hand odds.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use handodds::{Classification, SimulationOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deal five-card hands and estimate how often a hand property occurs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a card, then a deck before and after shuffling and dealing.
    Demo {
        /// Shuffle seed. Defaults to the current time.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Deal hands until enough of them match, then print the probability.
    Simulate {
        /// Hand property to count.
        #[arg(short, long, default_value_t = Classification::Straight)]
        classification: Classification,

        /// Matching hands to observe before stopping.
        #[arg(short, long, default_value_t = 1000)]
        target: u64,

        /// Shuffle seed. Defaults to the current time.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many hands.
        #[arg(long)]
        max_trials: Option<u64>,

        /// Independent workers, each with its own deck and generator.
        #[arg(short, long, default_value_t = 1)]
        workers: usize,
    },
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn demo(seed: u64) -> Result<(), handodds::DemoError> {
    let mut out = String::new();
    handodds::write_demo(&mut out, &mut ChaCha8Rng::seed_from_u64(seed))?;
    print!("{out}");
    Ok(())
}

#[cfg(feature = "parallel")]
fn run(
    options: &SimulationOptions,
    classification: Classification,
) -> Result<handodds::Estimate, handodds::SimulationError> {
    if options.workers > 1 {
        handodds::simulate_parallel(options, |hand| classification.matches(hand))
    } else {
        handodds::simulate(options, |hand| classification.matches(hand))
    }
}

#[cfg(not(feature = "parallel"))]
fn run(
    options: &SimulationOptions,
    classification: Classification,
) -> Result<handodds::Estimate, handodds::SimulationError> {
    if options.workers > 1 {
        log::warn!("built without the `parallel` feature; running on one worker");
    }
    handodds::simulate(options, |hand| classification.matches(hand))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = match args.command {
        Command::Demo { seed } => {
            demo(seed.unwrap_or_else(time_seed)).map_err(|err| err.to_string())
        }
        Command::Simulate {
            classification,
            target,
            seed,
            max_trials,
            workers,
        } => {
            let options = SimulationOptions::default()
                .with_target_matches(target)
                .with_seed(seed.unwrap_or_else(time_seed))
                .with_max_trials(max_trials)
                .with_workers(workers);
            log::info!(
                "simulating {classification} until {target} matches (seed {}, {workers} worker(s))",
                options.seed
            );
            run(&options, classification)
                .map(|estimate| {
                    log::info!("{} matches in {} hands", estimate.matches, estimate.trials);
                    println!("The probability of {classification} is {estimate}");
                })
                .map_err(|err| err.to_string())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
