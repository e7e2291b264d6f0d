use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mmx_transforms::geometric_adstock;

fn bench_geometric_adstock(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometric_adstock");
    for &len in &[104usize, 1_040, 10_400] {
        let spend: Vec<f64> = (0..len).map(|t| 100.0 + (t % 13) as f64).collect();
        for &max_lag in &[4usize, 13] {
            group.bench_with_input(
                BenchmarkId::new(format!("lag_{max_lag}"), len),
                &spend,
                |b, s| b.iter(|| geometric_adstock(black_box(s), 0.6, max_lag).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_geometric_adstock);
criterion_main!(benches);
