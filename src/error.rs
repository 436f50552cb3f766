//! Error types for the hopnet crate.
//!
//! This module provides a unified error type for all operations in the
//! crate, using the `thiserror` crate for ergonomic error handling. There
//! are no retries anywhere in the simulator: numeric computation is
//! deterministic given its random inputs, so every failure aborts the run.

use thiserror::Error;

/// The main error type for hopnet operations.
#[derive(Error, Debug)]
pub enum HopnetError {
    /// No patterns were supplied for training; no meaningful weight matrix
    /// can be formed from an empty set.
    #[error("Empty training set - at least one pattern is required")]
    EmptyTrainingSet,

    /// A pattern's length does not match the network's neuron count
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length (the network's neuron count)
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    /// Statistics were requested over an empty sample set
    #[error("Empty sample set - no trial outcomes to aggregate")]
    EmptySamples,

    /// Recall exceeded the configured sweep cap without settling
    #[error("Recall did not settle within {sweeps} sweeps")]
    ConvergenceStalled {
        /// Number of sweeps executed before giving up
        sweeps: usize,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error occurred
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized `Result` type for hopnet operations.
///
/// This is a type alias for `Result<T, HopnetError>` and is used
/// throughout the codebase for consistency.
pub type Result<T> = std::result::Result<T, HopnetError>;
