use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use orderstat::select::{deterministic_select, percentile_rank, randomized_select, InputShape};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 4] = [1_000, 10_000, 50_000, 100_000];

fn bench_selection(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for shape in InputShape::ALL {
        let mut group = c.benchmark_group(format!("select_{}", shape));

        for &size in &SIZES {
            let data = shape.generate(size, &mut rng);
            let k = percentile_rank(size, 0.5);

            group.bench_with_input(BenchmarkId::new("randomized", size), &data, |b, data| {
                let mut pivot_rng = ChaCha20Rng::seed_from_u64(size as u64);
                b.iter_batched_ref(
                    || data.clone(),
                    |arr| black_box(randomized_select(arr, k, &mut pivot_rng)),
                    BatchSize::LargeInput,
                )
            });

            group.bench_with_input(BenchmarkId::new("deterministic", size), &data, |b, data| {
                b.iter_batched_ref(
                    || data.clone(),
                    |arr| black_box(deterministic_select(arr, k)),
                    BatchSize::LargeInput,
                )
            });

            group.bench_with_input(BenchmarkId::new("std_select_nth", size), &data, |b, data| {
                b.iter_batched_ref(
                    || data.clone(),
                    |arr| black_box(*arr.select_nth_unstable(k).1),
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
