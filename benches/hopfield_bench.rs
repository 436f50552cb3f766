//! Performance benchmarks for the Hopfield engine hot paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hopnet::pattern::{hammed_patterns, random_pattern};
use hopnet::HopfieldNet;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_train_on(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_on");

    for &num_neurons in [50, 100, 200].iter() {
        let mut rng = StdRng::seed_from_u64(0);
        let patterns: Vec<_> = (0..5).map(|_| random_pattern(num_neurons, &mut rng)).collect();
        let mut net = HopfieldNet::new(num_neurons);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_neurons),
            &num_neurons,
            |b, _| {
                b.iter(|| {
                    net.zeroize();
                    net.train_on(black_box(&patterns)).unwrap();
                });
            },
        );
    }
    group.finish();
}

fn bench_energy(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let pattern = random_pattern(200, &mut rng);
    let mut net = HopfieldNet::new(200);
    net.train_on(std::slice::from_ref(&pattern)).unwrap();
    let state = pattern.to_f64();

    c.bench_function("energy_200", |b| {
        b.iter(|| black_box(net.energy(black_box(&state))));
    });
}

fn bench_run_to_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_min");
    group.sample_size(20);

    for &num_neurons in [50, 100].iter() {
        let mut rng = StdRng::seed_from_u64(0);
        let stored = random_pattern(num_neurons, &mut rng);
        let mut net = HopfieldNet::new(num_neurons);
        net.train_on(std::slice::from_ref(&stored)).unwrap();

        let probe = hammed_patterns(&stored, 1, num_neurons / 10, false, &mut rng)
            .pop()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_neurons),
            &num_neurons,
            |b, _| {
                b.iter(|| {
                    black_box(net.run_to_min(black_box(&probe), &mut rng).unwrap());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_train_on, bench_energy, bench_run_to_min);
criterion_main!(benches);
