use cache_aware::TILE_SIZE;
use cache_aware::Variant;
use cache_aware::matrix::init::zero;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for &n in &[64usize, 128, 256] {
        let a: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
        let mut out = vec![0.0; n * n];
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        for variant in Variant::ALL {
            group.bench_with_input(BenchmarkId::new(variant.label(), n), &n, |bench, &n| {
                bench.iter(|| {
                    zero(&mut out);
                    variant.multiply(black_box(&a), black_box(&b), &mut out, n, TILE_SIZE);
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
