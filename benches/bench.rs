// Criterion benchmarks for Book Assign

use book_assign::core::{build_cost_matrix, solve, Assigner};
use book_assign::models::{Matrix, ScoreTable, ScoringPolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_scores(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(0..=10) as f64).unwrap()
}

fn bench_cost_matrix(c: &mut Criterion) {
    let scores = random_scores(100, 100, 1);

    c.bench_function("build_cost_matrix_100x100", |b| {
        b.iter(|| build_cost_matrix(black_box(&scores), ScoringPolicy::Standard, None));
    });
}

fn bench_solve_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_square");

    for n in [10, 50, 100, 200].iter() {
        let cost = build_cost_matrix(&random_scores(*n, *n, *n as u64), ScoringPolicy::Standard, None)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("hungarian", n), n, |b, _| {
            b.iter(|| solve(black_box(&cost)));
        });
    }

    group.finish();
}

fn bench_solve_rectangular(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_rectangular");

    for (rows, cols) in [(100, 20), (20, 100), (200, 50)].iter() {
        let cost = random_scores(*rows, *cols, 9);

        group.bench_with_input(
            BenchmarkId::new("hungarian", format!("{}x{}", rows, cols)),
            &cost,
            |b, cost| {
                b.iter(|| solve(black_box(cost)));
            },
        );
    }

    group.finish();
}

fn bench_assigner(c: &mut Criterion) {
    let scores = random_scores(60, 40, 3);
    let table = ScoreTable::new(
        (0..60).map(|i| format!("Book{}", i)).collect(),
        (0..40).map(|i| format!("Person{}", i)).collect(),
        scores,
    )
    .unwrap();
    let assigner = Assigner::default();

    c.bench_function("assigner_60_books_40_people", |b| {
        b.iter(|| assigner.assign(black_box(&table), None));
    });
}

criterion_group!(
    benches,
    bench_cost_matrix,
    bench_solve_square,
    bench_solve_rectangular,
    bench_assigner
);

criterion_main!(benches);
