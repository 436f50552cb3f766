//! hopnet - Hopfield associative-memory convergence simulator.
//!
//! hopnet trains fully-connected Hopfield networks with the Hebbian rule
//! and measures, by Monte Carlo simulation, how reliably they recall a
//! stored memory from corrupted inputs as network size, training load, and
//! corruption distance vary.
//!
//! # Key Components
//!
//! - **Vector / Matrix**: dense numeric containers with explicit, named
//!   type conversions
//! - **Pattern utilities**: random bipolar patterns and controlled-distance
//!   corruption
//! - **HopfieldNet**: Hebbian training, energy function, synchronous probe,
//!   asynchronous run-to-convergence recall
//! - **Sweep driver**: parallel parameter sweep aggregating per-trial
//!   convergence counts into one CSV row per sweep point
//!
//! # Examples
//!
//! ## Store and recall a memory
//!
//! ```
//! use hopnet::{HopfieldNet, Pattern};
//! use hopnet::pattern::hammed_patterns;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let stored = Pattern::from_vec(vec![-1, 1, 1, 1, -1]);
//!
//! let mut net = HopfieldNet::new(5);
//! net.train_on(std::slice::from_ref(&stored)).unwrap();
//!
//! // Corrupt one position and recall
//! let probes = hammed_patterns(&stored, 1, 1, false, &mut rng);
//! let (recalled, _sweeps) = net.run_to_min(&probes[0], &mut rng).unwrap();
//! assert_eq!(recalled, stored);
//! ```
//!
//! ## Sweep a small parameter grid
//!
//! ```no_run
//! use hopnet::sweep::{run_sweep_to_path, SweepConfig};
//! use std::path::Path;
//!
//! let config = SweepConfig {
//!     neurons_max: 100,
//!     ..SweepConfig::default()
//! };
//! run_sweep_to_path(&config, Path::new("proportion-data.csv")).unwrap();
//! ```
//!
//! # Reproducibility
//!
//! Every random decision flows from a caller-supplied random source. The
//! sweep driver derives one `StdRng` per worker from the configured root
//! seed and the worker's sweep-point parameters, so a run's output rows are
//! identical for a fixed seed no matter how the thread pool schedules them.

// Module declarations
pub mod error;
pub mod utils;

// Numeric containers
pub mod matrix;
pub mod vector;

// Network engine and pattern generation
pub mod hopfield;
pub mod pattern;

// Experiment driver
pub mod stats;
pub mod sweep;

// Re-exports for convenient access
pub use error::{HopnetError, Result};
pub use hopfield::HopfieldNet;
pub use matrix::Matrix;
pub use pattern::Pattern;
pub use stats::SummaryStats;
pub use sweep::{SweepConfig, SweepRecord};
pub use vector::Vector;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "hopnet";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
