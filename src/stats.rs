//! Summary statistics over trial outcomes.
//!
//! One sweep point produces a batch of per-trial convergence counts; this
//! module reduces such a batch to the min/mean/max, sample standard
//! deviation, and quartiles that make up one output row.

use crate::error::{HopnetError, Result};
use itertools::Itertools;
use itertools::MinMaxResult::{MinMax, NoElements, OneElement};
use serde::{Deserialize, Serialize};

/// Summary statistics of a batch of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Smallest sample
    pub min: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Largest sample
    pub max: f64,
    /// Sample standard deviation (Bessel's correction); 0.0 for a single
    /// sample
    pub std_dev: f64,
    /// 25th percentile
    pub p25: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
}

impl SummaryStats {
    /// Aggregate a batch of samples.
    ///
    /// Percentiles are read by sorted-array indexing at `q * n` (truncated),
    /// the scheme the simulation data has always been reported with; no
    /// interpolation between neighboring samples.
    ///
    /// # Errors
    ///
    /// [`HopnetError::EmptySamples`] if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopnet::SummaryStats;
    ///
    /// let stats = SummaryStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.min, 2.0);
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.max, 9.0);
    /// assert_eq!(stats.median, 5.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        let (min, max) = match samples.iter().copied().minmax() {
            NoElements => return Err(HopnetError::EmptySamples),
            OneElement(v) => (v, v),
            MinMax(lo, hi) => (lo, hi),
        };

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        let std_dev = if samples.len() > 1 {
            let sum_sq: f64 = samples.iter().map(|&v| (v - mean) * (v - mean)).sum();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let p25 = sorted[(0.25 * n) as usize];
        let median = sorted[(0.50 * n) as usize];
        let p75 = sorted[(0.75 * n) as usize];

        Ok(Self {
            min,
            mean,
            max,
            std_dev,
            p25,
            median,
            p75,
        })
    }
}
