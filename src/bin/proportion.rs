//! Convergence-proportion sweep entry point.
//!
//! Runs the Monte Carlo sweep with runtime-configurable ranges and writes
//! one CSV row per (neurons, trained patterns, corruption radius)
//! combination. Progress is logged through `env_logger`; set
//! `RUST_LOG=info` to follow a run.

use anyhow::Result;
use clap::Parser;
use hopnet::sweep::{run_sweep_to_path, SweepConfig};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proportion")]
#[command(about = "Monte Carlo sweep of Hopfield recall convergence", long_about = None)]
struct Cli {
    /// Output CSV file
    #[arg(short, long, default_value = "proportion-data.csv")]
    output: PathBuf,

    /// Smallest network size (inclusive)
    #[arg(long, default_value_t = 25)]
    neurons_min: usize,

    /// Largest network size (exclusive)
    #[arg(long, default_value_t = 450)]
    neurons_max: usize,

    /// Network size increment
    #[arg(long, default_value_t = 25)]
    neurons_step: usize,

    /// Trained-pattern count increment (upper bound is the Hebbian
    /// capacity of each network size)
    #[arg(long, default_value_t = 3)]
    train_patterns_step: usize,

    /// Corruption radius increment (upper bound is half the network size)
    #[arg(long, default_value_t = 3)]
    hamming_step: usize,

    /// Corrupted test patterns recalled per trial
    #[arg(long, default_value_t = 100)]
    test_patterns: usize,

    /// Independent trials per parameter combination
    #[arg(long, default_value_t = 125)]
    simulations_per_step: usize,

    /// Train extra patterns at a fixed Hamming radius from the reference
    /// instead of independently at random
    #[arg(long)]
    train_hammed: bool,

    /// Radius for --train-hammed
    #[arg(long, default_value_t = 0)]
    train_hamming: usize,

    /// Root RNG seed; a fixed seed reproduces the run exactly
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SweepConfig {
        neurons_min: cli.neurons_min,
        neurons_max: cli.neurons_max,
        neurons_step: cli.neurons_step,
        train_patterns_step: cli.train_patterns_step,
        hamming_step: cli.hamming_step,
        test_patterns: cli.test_patterns,
        simulations_per_step: cli.simulations_per_step,
        train_hammed: cli.train_hammed,
        train_hamming: cli.train_hamming,
        seed: cli.seed,
    };

    info!("running proportion simulations -> {}", cli.output.display());
    run_sweep_to_path(&config, &cli.output)?;
    info!("finished running");

    Ok(())
}
