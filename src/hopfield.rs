//! Hopfield network engine: Hebbian training and energy-minimizing recall.
//!
//! A [`HopfieldNet`] is a fully-connected network of N bipolar neurons whose
//! state evolves to minimize the energy function
//!
//! ```text
//! E(s) = -0.5 * sum_i sum_j W[i][j] * s[i] * s[j]
//! ```
//!
//! Training with the Hebbian rule places each stored pattern at (or near) a
//! local minimum of E; recall starts from a corrupted state and descends
//! asynchronously until the energy stops changing.
//!
//! # Weight matrix invariants
//!
//! After `train_on`, `W[i][j] == W[j][i]` for all i, j and `W[i][i] == 0`.
//! The matrix is owned exclusively by the engine and is rebuilt by calling
//! `zeroize` followed by `train_on`.
//!
//! # Examples
//!
//! ```
//! use hopnet::{HopfieldNet, Pattern};
//! use rand::SeedableRng;
//!
//! let stored = Pattern::from_vec(vec![-1, 1, 1, 1, -1]);
//!
//! let mut net = HopfieldNet::new(5);
//! net.train_on(std::slice::from_ref(&stored)).unwrap();
//!
//! // A stored pattern is a fixed point of the recall dynamics.
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let (recalled, _sweeps) = net.run_to_min(&stored, &mut rng).unwrap();
//! assert_eq!(recalled, stored);
//! ```

use crate::error::{HopnetError, Result};
use crate::matrix::Matrix;
use crate::pattern::Pattern;
use crate::utils::{sgn, shuffle_indices, TolEq, EPS};
use crate::vector::Vector;
use rand::Rng;

/// Number of consecutive sweeps the energy must hold still (within
/// [`EPS`]) before recall is considered settled.
const QUIET_SWEEPS: usize = 5;

/// Fully-connected Hopfield network with a symmetric, zero-diagonal weight
/// matrix.
///
/// The neuron count is fixed at construction. The engine is cheap to reuse:
/// `zeroize` + `train_on` rebuilds the weights in place without
/// reallocating, which the sweep driver relies on when it runs thousands of
/// trials per parameter combination.
#[derive(Clone, Debug)]
pub struct HopfieldNet {
    num_neurons: usize,
    weights: Matrix<f64>,
    max_sweeps: Option<usize>,
}

impl HopfieldNet {
    /// Create a network of `num_neurons` neurons with all weights zero.
    ///
    /// # Panics
    ///
    /// Panics if `num_neurons == 0`.
    pub fn new(num_neurons: usize) -> Self {
        assert!(num_neurons > 0, "num_neurons must be > 0");

        Self {
            num_neurons,
            weights: Matrix::new(num_neurons, num_neurons),
            max_sweeps: None,
        }
    }

    /// Abort recall with [`HopnetError::ConvergenceStalled`] if it has not
    /// settled after `cap` sweeps.
    ///
    /// By default there is no cap: the quiet-energy criterion alone decides
    /// termination, which matches the behavior the simulation data was
    /// gathered with but is not formally guaranteed to halt on a
    /// pathological weight configuration.
    pub fn with_max_sweeps(mut self, cap: usize) -> Self {
        self.max_sweeps = Some(cap);
        self
    }

    /// Number of neurons.
    #[inline(always)]
    pub fn num_neurons(&self) -> usize {
        self.num_neurons
    }

    /// Borrow the weight matrix.
    pub fn weights(&self) -> &Matrix<f64> {
        &self.weights
    }

    /// Reset all weights to zero.
    ///
    /// `train_on` accumulates into the current weights, so an engine that
    /// is retrained on an unrelated training set must be zeroized first.
    pub fn zeroize(&mut self) {
        self.weights.zeroize();
    }

    /// Train the network on a set of patterns with the Hebbian rule.
    ///
    /// For every unordered pair of distinct neurons (i, j) and every
    /// pattern p, `p[i] * p[j]` is accumulated into both `W[i][j]` and
    /// `W[j][i]`; the sum is then divided by the pattern count and the
    /// diagonal forced to exactly zero. O(P * N^2) for P patterns.
    ///
    /// Pattern order is irrelevant: the rule is a symmetric sum over pairs.
    ///
    /// # Errors
    ///
    /// * [`HopnetError::EmptyTrainingSet`] if `patterns` is empty.
    /// * [`HopnetError::DimensionMismatch`] if any pattern's length differs
    ///   from the neuron count.
    pub fn train_on(&mut self, patterns: &[Pattern]) -> Result<()> {
        if patterns.is_empty() {
            return Err(HopnetError::EmptyTrainingSet);
        }
        for pattern in patterns {
            self.check_len(pattern)?;
        }

        let n = self.num_neurons;
        for pattern in patterns {
            let patt = pattern.to_f64();
            for i in 0..n {
                let ival = patt[i];
                for j in (i + 1)..n {
                    let val = ival * patt[j];
                    self.weights[(i, j)] += val;
                    self.weights[(j, i)] += val;
                }
            }
        }

        self.weights.scale(1.0 / patterns.len() as f64);

        for i in 0..n {
            self.weights[(i, i)] = 0.0;
        }
        Ok(())
    }

    /// Energy of a network state: `-0.5 * sum_i sum_j W[i][j] s[i] s[j]`.
    ///
    /// Local minima of this function are the stable, recallable memories.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `state.len()` differs from the neuron count.
    pub fn energy(&self, state: &Vector<f64>) -> f64 {
        debug_assert_eq!(state.len(), self.num_neurons);
        let mut sum = 0.0;
        for i in 0..self.num_neurons {
            sum += state[i] * self.weights.row_dot(i, state);
        }
        -0.5 * sum
    }

    /// Energy of a bipolar pattern. Convenience wrapper around [`energy`]
    /// that widens the pattern first.
    ///
    /// [`energy`]: HopfieldNet::energy
    pub fn pattern_energy(&self, pattern: &Pattern) -> Result<f64> {
        self.check_len(pattern)?;
        Ok(self.energy(&pattern.to_f64()))
    }

    /// Synchronous update probe: compute `W * s` and apply the sign
    /// decision to every element at once from the same snapshot.
    ///
    /// An element whose local field lies within [`EPS`] of zero keeps its
    /// previous value. This is an inspection tool; the convergence loop
    /// uses asynchronous updates instead ([`run_to_min`]).
    ///
    /// [`run_to_min`]: HopfieldNet::run_to_min
    pub fn update(&self, pattern: &Pattern) -> Result<Pattern> {
        self.check_len(pattern)?;

        let state = pattern.to_f64();
        let mut out = self.weights.mult(&state);
        for i in 0..out.len() {
            if out[i].tol_eq(0.0) {
                out[i] = state[i];
            } else {
                out[i] = sgn(out[i]);
            }
        }
        Ok(out.trunc_bipolar())
    }

    /// Run the asynchronous recall dynamics from `pattern` until the energy
    /// settles. Returns the final bipolar state and the number of sweeps
    /// executed.
    ///
    /// Each sweep visits every neuron exactly once in a freshly shuffled
    /// order and updates it in place, so later neurons in the sweep see the
    /// already-updated values of earlier ones. For neuron i the local field
    /// `h_i = sum_j W[i][j] s[j]` decides the new state: above `EPS` the
    /// neuron goes to +1, below `-EPS` to -1, and inside the dead zone it
    /// keeps its value (no rule applies exactly at zero).
    ///
    /// Termination: the total energy has stayed unchanged (within `EPS`)
    /// for `QUIET_SWEEPS` (5) consecutive sweeps. A pattern that is already
    /// a fixed point therefore comes back identical after exactly that many
    /// sweeps.
    ///
    /// # Errors
    ///
    /// * [`HopnetError::DimensionMismatch`] if the pattern's length differs
    ///   from the neuron count.
    /// * [`HopnetError::ConvergenceStalled`] if a sweep cap was set via
    ///   [`with_max_sweeps`](HopfieldNet::with_max_sweeps) and recall
    ///   exceeded it.
    pub fn run_to_min<R: Rng>(&self, pattern: &Pattern, rng: &mut R) -> Result<(Pattern, usize)> {
        self.check_len(pattern)?;

        let mut state = pattern.to_f64();
        let mut energy = self.energy(&state);

        let mut order: Vec<usize> = (0..self.num_neurons).collect();
        let mut sweeps = 0;
        let mut quiet = 0;

        loop {
            shuffle_indices(&mut order, rng);
            sweeps += 1;

            for &i in &order {
                let h = self.weights.row_dot(i, &state);
                if h > EPS {
                    state[i] = 1.0;
                } else if h < -EPS {
                    state[i] = -1.0;
                }
                // |h| <= EPS: no rule applies, the neuron keeps its value
            }

            let next_energy = self.energy(&state);
            if energy.tol_eq(next_energy) {
                quiet += 1;
                if quiet >= QUIET_SWEEPS {
                    break;
                }
            } else {
                quiet = 0;
            }
            energy = next_energy;

            if let Some(cap) = self.max_sweeps {
                if sweeps >= cap {
                    return Err(HopnetError::ConvergenceStalled { sweeps });
                }
            }
        }

        Ok((state.trunc_bipolar(), sweeps))
    }

    fn check_len(&self, pattern: &Pattern) -> Result<()> {
        if pattern.len() != self.num_neurons {
            return Err(HopnetError::DimensionMismatch {
                expected: self.num_neurons,
                actual: pattern.len(),
            });
        }
        Ok(())
    }
}
