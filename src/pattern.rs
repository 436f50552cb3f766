//! Bipolar pattern generation and corruption.
//!
//! A [`Pattern`] is a fixed-length vector of +/-1 values representing a
//! memory or a network state. This module creates them two ways: uniformly
//! at random, or by flipping a controlled number of positions of a reference
//! pattern ("hammed" patterns, named for the Hamming distance to their
//! base).
//!
//! All generators take a caller-owned random source. Workers seed one
//! `StdRng` each (see [`derive_seed`](crate::utils::derive_seed)), which
//! makes runs reproducible under a fixed root seed and keeps randomness
//! thread-local in the parallel sweep.

use crate::utils::shuffle_indices;
use crate::vector::Vector;
use rand::Rng;

/// A bipolar pattern: every element is +1 or -1.
pub type Pattern = Vector<i8>;

/// Generate a pattern of `len` elements, each independently +1 or -1 with
/// probability 1/2.
///
/// No balance between +1s and -1s is guaranteed.
///
/// # Examples
///
/// ```
/// use hopnet::pattern::random_pattern;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let p = random_pattern(25, &mut rng);
/// assert_eq!(p.len(), 25);
/// assert!(p.iter().all(|&v| v == 1 || v == -1));
/// ```
pub fn random_pattern<R: Rng>(len: usize, rng: &mut R) -> Pattern {
    let mut pattern = Pattern::new(len);
    for i in 0..len {
        pattern[i] = if rng.gen_bool(0.5) { 1 } else { -1 };
    }
    pattern
}

/// Generate `count` independent random patterns of `len` elements each.
pub fn random_patterns<R: Rng>(len: usize, count: usize, rng: &mut R) -> Vec<Pattern> {
    (0..count).map(|_| random_pattern(len, rng)).collect()
}

/// Generate `count` patterns at Hamming radius `radius` from a base pattern.
///
/// Flip positions come from a single random permutation of all indices,
/// partitioned into contiguous blocks of `radius` positions, one block per
/// generated pattern. When `count * radius` exceeds the pattern length the
/// partition wraps around the permutation (index taken modulo the length),
/// so blocks reuse positions across patterns and a block can even contain
/// the same position twice when `radius` exceeds the length; a doubled flip
/// cancels and the produced pattern lands under-distance. This mirrors the
/// generator the simulation was measured with and is intentional; see
/// DESIGN.md.
///
/// If `incremental` is true, each pattern is derived from the *previously
/// generated* pattern instead of `original`, producing a random walk whose
/// step size is `radius`.
///
/// # Panics
///
/// Panics if `original` is empty while `count > 0` and `radius > 0`.
///
/// # Examples
///
/// ```
/// use hopnet::pattern::{hamming_distance, random_pattern, hammed_patterns};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let original = random_pattern(25, &mut rng);
/// let corrupted = hammed_patterns(&original, 3, 4, false, &mut rng);
///
/// assert_eq!(corrupted.len(), 3);
/// for c in &corrupted {
///     assert_eq!(hamming_distance(&original, c), 4);
/// }
/// ```
pub fn hammed_patterns<R: Rng>(
    original: &Pattern,
    count: usize,
    radius: usize,
    incremental: bool,
    rng: &mut R,
) -> Vec<Pattern> {
    if count == 0 || radius == 0 {
        return vec![original.clone(); count];
    }
    assert!(!original.is_empty(), "cannot corrupt an empty pattern");

    let len = original.len();
    let mut indices: Vec<usize> = (0..len).collect();
    shuffle_indices(&mut indices, rng);

    let mut patterns = Vec::with_capacity(count);
    let mut base = original.clone();
    for k in 0..count {
        let mut next = if incremental {
            base.clone()
        } else {
            original.clone()
        };
        for b in 0..radius {
            let ind = indices[(k * radius + b) % len];
            next[ind] = -next[ind];
        }
        if incremental {
            base = next.clone();
        }
        patterns.push(next);
    }
    patterns
}

/// Count the coordinate positions at which two patterns differ.
///
/// # Panics
///
/// Panics if the patterns have different lengths.
pub fn hamming_distance(a: &Pattern, b: &Pattern) -> usize {
    assert_eq!(a.len(), b.len(), "pattern length mismatch");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}
