use bayes_grid::{Likelihood, Posterior, Prior};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn grid(steps: u32) -> Vec<f64> {
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}

fn sample(n: usize) -> Vec<u8> {
    (0..n).map(|i| if i % 4 == 0 { 1 } else { 0 }).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = sample(10_000);
    c.bench_function("count sample 10000", |b| {
        b.iter(|| Likelihood::new(black_box(&data)).unwrap())
    });

    for steps in [10, 1000] {
        let prior = Prior::uniform(grid(steps)).unwrap();
        let likelihood = Likelihood::new(&data).unwrap();
        c.bench_function(&format!("posterior grid {}", steps + 1), |b| {
            b.iter(|| Posterior::from_likelihood(black_box(likelihood), black_box(&prior)).unwrap())
        });
    }

    let prior = Prior::uniform(grid(1000)).unwrap();
    let post = Posterior::new(&data, &prior).unwrap();
    let queries = grid(1000);
    c.bench_function("exact lookup grid 1001", |b| {
        b.iter_batched(
            || queries.clone(),
            |queries| queries.iter().map(|&p| post.log_prob(p)).sum::<f64>(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("beta prior grid 1001", |b| {
        b.iter(|| Prior::beta(black_box(grid(1000)), 2., 5.).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
