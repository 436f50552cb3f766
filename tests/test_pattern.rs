//! Tests for bipolar pattern generation and corruption.
//!
//! Tests cover:
//! - Randomization invariants (bipolar values, rough balance)
//! - Exact-radius corruption and the documented wraparound behavior
//! - Incremental (random walk) corruption
//! - Determinism under a fixed seed

use hopnet::pattern::{hammed_patterns, hamming_distance, random_pattern, random_patterns};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_random_pattern_is_bipolar() {
    let mut rng = StdRng::seed_from_u64(0);
    let p = random_pattern(500, &mut rng);
    assert_eq!(p.len(), 500);
    assert!(p.iter().all(|&v| v == 1 || v == -1));
}

#[test]
fn test_random_pattern_roughly_balanced() {
    // Each element is +/-1 with p = 1/2; over 10_000 draws the sum should
    // stay well inside +/-500 (5 sigma is ~500).
    let mut rng = StdRng::seed_from_u64(1);
    let p = random_pattern(10_000, &mut rng);
    let sum: i64 = p.iter().map(|&v| i64::from(v)).sum();
    assert!(sum.abs() < 500, "sum {} suspiciously unbalanced", sum);
}

#[test]
fn test_random_patterns_independent_lengths() {
    let mut rng = StdRng::seed_from_u64(2);
    let ps = random_patterns(40, 12, &mut rng);
    assert_eq!(ps.len(), 12);
    assert!(ps.iter().all(|p| p.len() == 40));

    // Two 40-element draws colliding is a 2^-40 event
    assert_ne!(ps[0], ps[1]);
}

#[test]
fn test_hammed_single_pattern_exact_radius() {
    let mut rng = StdRng::seed_from_u64(3);
    let original = random_pattern(50, &mut rng);

    for radius in [1, 5, 25, 50] {
        let ps = hammed_patterns(&original, 1, radius, false, &mut rng);
        assert_eq!(ps.len(), 1);
        assert_eq!(hamming_distance(&original, &ps[0]), radius);
    }
}

#[test]
fn test_hammed_batch_without_wraparound() {
    let mut rng = StdRng::seed_from_u64(4);
    let original = random_pattern(60, &mut rng);

    // 10 * 6 = 60 exactly fills the permutation: every position is flipped
    // in exactly one pattern.
    let ps = hammed_patterns(&original, 10, 6, false, &mut rng);
    for p in &ps {
        assert_eq!(hamming_distance(&original, p), 6);
    }

    let mut flip_counts = vec![0usize; 60];
    for p in &ps {
        for i in 0..60 {
            if p[i] != original[i] {
                flip_counts[i] += 1;
            }
        }
    }
    assert!(flip_counts.iter().all(|&c| c == 1));
}

#[test]
fn test_hammed_wraparound_repeats_blocks() {
    let mut rng = StdRng::seed_from_u64(5);
    let original = random_pattern(6, &mut rng);

    // Blocks of 3 positions wrap after two patterns, so patterns 0 and 2
    // (and 1 and 3) flip identical position sets.
    let ps = hammed_patterns(&original, 4, 3, false, &mut rng);
    assert_eq!(ps[0], ps[2]);
    assert_eq!(ps[1], ps[3]);
    assert_ne!(ps[0], ps[1]);
    for p in &ps {
        assert_eq!(hamming_distance(&original, p), 3);
    }
}

#[test]
fn test_hammed_incremental_random_walk() {
    let mut rng = StdRng::seed_from_u64(6);
    let original = random_pattern(100, &mut rng);

    let ps = hammed_patterns(&original, 5, 4, true, &mut rng);

    // Consecutive steps differ by exactly the radius
    assert_eq!(hamming_distance(&original, &ps[0]), 4);
    for w in ps.windows(2) {
        assert_eq!(hamming_distance(&w[0], &w[1]), 4);
    }

    // Disjoint blocks accumulate: the walk drifts monotonically here
    assert_eq!(hamming_distance(&original, &ps[4]), 20);
}

#[test]
fn test_hammed_does_not_mutate_original() {
    let mut rng = StdRng::seed_from_u64(7);
    let original = random_pattern(30, &mut rng);
    let snapshot = original.clone();

    let _ = hammed_patterns(&original, 8, 3, false, &mut rng);
    let _ = hammed_patterns(&original, 8, 3, true, &mut rng);

    assert_eq!(original, snapshot);
}

#[test]
fn test_generation_deterministic_under_seed() {
    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);

    let a = random_pattern(64, &mut rng1);
    let b = random_pattern(64, &mut rng2);
    assert_eq!(a, b);

    let ha = hammed_patterns(&a, 4, 5, false, &mut rng1);
    let hb = hammed_patterns(&b, 4, 5, false, &mut rng2);
    assert_eq!(ha, hb);
}
