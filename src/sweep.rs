//! Monte Carlo sweep driver.
//!
//! Sweeps network size, trained-pattern count, and test-pattern corruption
//! radius, measuring for each combination the proportion of corrupted
//! inputs that recall the original reference pattern. Every combination is
//! independent, so the innermost (corruption radius) dimension runs on a
//! rayon worker pool: each worker owns one reused [`HopfieldNet`] and its
//! own seeded random source, and the only shared resource is the CSV
//! writer behind a mutex.
//!
//! One output row per (neurons, trained patterns, radius) combination
//! carries the summary statistics of `simulations_per_step` independent
//! trials.

use crate::error::Result;
use crate::hopfield::HopfieldNet;
use crate::pattern::{hammed_patterns, random_pattern, random_patterns};
use crate::stats::SummaryStats;
use crate::utils::derive_seed;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Sweep parameter ranges and trial counts.
///
/// The defaults reproduce the ranges the convergence dataset was originally
/// gathered with. Two range bounds are derived per network size rather than
/// configured: the trained-pattern count sweeps up to the theoretical
/// Hebbian capacity [`hebbian_capacity`], and the corruption radius sweeps
/// up to half the neuron count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest network size (inclusive)
    pub neurons_min: usize,
    /// Largest network size (exclusive)
    pub neurons_max: usize,
    /// Network size increment
    pub neurons_step: usize,
    /// Trained-pattern count increment (counts extra patterns beyond the
    /// reference; the sweep starts at 0 extras)
    pub train_patterns_step: usize,
    /// Corruption radius increment (the sweep starts at radius 1)
    pub hamming_step: usize,
    /// Corrupted test patterns recalled per trial
    pub test_patterns: usize,
    /// Independent trials per parameter combination
    pub simulations_per_step: usize,
    /// Train the extra patterns at a fixed Hamming radius from the
    /// reference instead of independently at random
    pub train_hammed: bool,
    /// Radius for `train_hammed` mode
    pub train_hamming: usize,
    /// Root seed; every worker derives its own deterministic seed from this
    /// and its sweep-point parameters
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            neurons_min: 25,
            neurons_max: 450,
            neurons_step: 25,
            train_patterns_step: 3,
            hamming_step: 3,
            test_patterns: 100,
            simulations_per_step: 125,
            train_hammed: false,
            train_hamming: 0,
            seed: 0x5eed,
        }
    }
}

/// Theoretical Hebbian storage capacity `ceil(N / sqrt(2 ln N))`.
///
/// Upper bound for the trained-pattern sweep: beyond this count recall of
/// any individual pattern is no longer expected to be reliable.
pub fn hebbian_capacity(num_neurons: usize) -> usize {
    let n = num_neurons as f64;
    (n / (2.0 * n.ln()).sqrt()).ceil() as usize
}

/// One output row: the identifying parameters of a sweep point plus the
/// aggregated trial statistics.
///
/// Serialized field names are the CSV header. The median is emitted under
/// the header name `mode`, a quirk the downstream analysis scripts already
/// expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRecord {
    pub neurons: usize,
    pub trained_patterns: usize,
    pub test_patterns: usize,
    pub test_pattern_hamming: usize,
    pub simulations_per_step: usize,
    pub min_proportion: usize,
    pub mean_proportion: f64,
    pub max_proportion: usize,
    pub std_proportion: f64,
    #[serde(rename = "25_perc")]
    pub perc_25: f64,
    pub mode: f64,
    #[serde(rename = "75_perc")]
    pub perc_75: f64,
}

/// Run one trial: train a fresh reference memory into `net` and count how
/// many corrupted probes recall it exactly.
///
/// Steps: generate a random reference pattern; train the zeroized engine on
/// the reference plus `trained_patterns` extras (random or hammed per the
/// config mode); generate `config.test_patterns` probes at Hamming radius
/// `hamming` from the reference; run each to its energy minimum and count
/// it as converged when the final state matches the reference exactly.
pub fn convergence_trial<R: Rng>(
    net: &mut HopfieldNet,
    trained_patterns: usize,
    hamming: usize,
    config: &SweepConfig,
    rng: &mut R,
) -> Result<usize> {
    let num_neurons = net.num_neurons();
    let reference = random_pattern(num_neurons, rng);

    let mut train_set = Vec::with_capacity(trained_patterns + 1);
    train_set.push(reference.clone());
    if config.train_hammed {
        train_set.extend(hammed_patterns(
            &reference,
            trained_patterns,
            config.train_hamming,
            false,
            rng,
        ));
    } else {
        train_set.extend(random_patterns(num_neurons, trained_patterns, rng));
    }

    net.zeroize();
    net.train_on(&train_set)?;
    drop(train_set);

    let probes = hammed_patterns(&reference, config.test_patterns, hamming, false, rng);

    let mut converged = 0;
    for probe in &probes {
        let (recalled, _steps) = net.run_to_min(probe, rng)?;
        if recalled.similar(&reference) {
            converged += 1;
        }
    }
    Ok(converged)
}

/// Run the full sweep, appending one CSV row per parameter combination to
/// `out`.
///
/// Corruption radii of one (neurons, trained patterns) point execute
/// concurrently; rows are written under a mutex and may therefore appear
/// out of iteration order. Each row carries its own identifying parameters,
/// and a fixed `config.seed` reproduces the same row contents regardless of
/// scheduling.
///
/// # Panics
///
/// Panics if any of the configured step sizes is zero.
pub fn run_sweep<W: Write + Send>(config: &SweepConfig, out: W) -> Result<()> {
    assert!(config.neurons_step > 0, "neurons_step must be > 0");
    assert!(config.train_patterns_step > 0, "train_patterns_step must be > 0");
    assert!(config.hamming_step > 0, "hamming_step must be > 0");

    let writer = Mutex::new(csv::Writer::from_writer(out));

    for num_neurons in (config.neurons_min..config.neurons_max).step_by(config.neurons_step) {
        let capacity = hebbian_capacity(num_neurons);
        for trained_patterns in (0..capacity).step_by(config.train_patterns_step) {
            info!(
                "running simulations on {} neurons and {} trained patterns",
                num_neurons, trained_patterns
            );

            let max_hamming = num_neurons / 2;
            let radii: Vec<usize> = (1..=max_hamming).step_by(config.hamming_step).collect();

            radii.par_iter().try_for_each(|&hamming| -> Result<()> {
                // One engine and one random source per worker; the engine
                // is zeroized and retrained inside every trial.
                let mut rng = StdRng::seed_from_u64(derive_seed(
                    config.seed,
                    &[num_neurons as u64, trained_patterns as u64, hamming as u64],
                ));
                let mut net = HopfieldNet::new(num_neurons);

                let mut outcomes = Vec::with_capacity(config.simulations_per_step);
                for _ in 0..config.simulations_per_step {
                    let converged =
                        convergence_trial(&mut net, trained_patterns, hamming, config, &mut rng)?;
                    outcomes.push(converged as f64);
                }

                let stats = SummaryStats::from_samples(&outcomes)?;
                let record = SweepRecord {
                    neurons: num_neurons,
                    trained_patterns,
                    test_patterns: config.test_patterns,
                    test_pattern_hamming: hamming,
                    simulations_per_step: config.simulations_per_step,
                    min_proportion: stats.min as usize,
                    mean_proportion: stats.mean,
                    max_proportion: stats.max as usize,
                    std_proportion: stats.std_dev,
                    perc_25: stats.p25,
                    mode: stats.median,
                    perc_75: stats.p75,
                };
                debug!(
                    "hamming {} of {} neurons done: mean {}",
                    hamming, num_neurons, record.mean_proportion
                );

                let mut w = writer.lock().expect("csv writer mutex poisoned");
                w.serialize(record)?;
                Ok(())
            })?;
        }
    }

    let mut w = writer.into_inner().expect("csv writer mutex poisoned");
    w.flush()?;
    Ok(())
}

/// Run the full sweep into a freshly created file at `path`.
///
/// Fails fast on open or write errors; partial results are worthless, so
/// nothing is retried.
pub fn run_sweep_to_path(config: &SweepConfig, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    run_sweep(config, BufWriter::new(file))
}
