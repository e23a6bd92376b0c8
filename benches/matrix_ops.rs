use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::{engine, Matrix};

fn bench_matmul_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for n in [4, 16, 64, 128] {
        let a = Matrix::from_vec(n, n, (0..n * n).map(|i| (i % 100) as f64).collect()).unwrap();
        let b =
            Matrix::from_vec(n, n, (0..n * n).map(|i| ((i * 2) % 100) as f64).collect()).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| {
                let result = black_box(a).matmul(black_box(b)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_inverse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    for n in [2, 8, 32, 64] {
        // Diagonally dominant, guaranteed invertible
        let mut data = vec![0.5f64; n * n];
        for i in 0..n {
            data[i * n + i] = n as f64;
        }
        let m = Matrix::from_vec(n, n, data).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |bench, m| {
            bench.iter(|| {
                let inv = black_box(m).inverse().unwrap();
                black_box(inv);
            });
        });
    }

    group.finish();
}

fn bench_engine_text_to_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for n in [2, 8, 32] {
        let text_a = Matrix::from_vec(n, n, (0..n * n).map(|i| (i % 9) as f64 + 0.5).collect())
            .unwrap()
            .to_text();
        let mut data = vec![0.25f64; n * n];
        for i in 0..n {
            data[i * n + i] = n as f64 + 1.0;
        }
        let text_b = Matrix::from_vec(n, n, data).unwrap().to_text();

        group.bench_with_input(
            BenchmarkId::new("divide", n),
            &(&text_a, &text_b),
            |bench, (text_a, text_b)| {
                bench.iter(|| {
                    let result = engine::divide(
                        n,
                        n,
                        black_box(text_a),
                        n,
                        n,
                        black_box(text_b),
                    )
                    .unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_matmul_sizes,
    bench_inverse_sizes,
    bench_engine_text_to_text
);
criterion_main!(benches);
