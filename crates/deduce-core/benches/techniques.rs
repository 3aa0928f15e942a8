//! Micro-benchmarks for technique searches and the full solve loop.
//!
//! ```sh
//! cargo bench --bench techniques
//! ```

use std::hint;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deduce_core::{Board, Solver, Technique};

const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn parsed(values: &str) -> Board {
    let mut board = Board::from_values(values).unwrap();
    board.initialize_candidates();
    board
}

fn bench_find_step(c: &mut Criterion) {
    let board = parsed(CLASSIC);
    let singles = Solver::with_techniques(vec![
        Technique::FullHouse,
        Technique::NakedSingle,
        Technique::HiddenSingle,
    ]);
    let full = Solver::new();

    c.bench_with_input(BenchmarkId::new("find_step", "singles"), &board, |b, board| {
        b.iter(|| hint::black_box(singles.find_step(board).unwrap()));
    });
    c.bench_with_input(BenchmarkId::new("find_step", "default"), &board, |b, board| {
        b.iter(|| hint::black_box(full.find_step(board).unwrap()));
    });
}

fn bench_fish_search(c: &mut Criterion) {
    // Digit 5 locked into an X-Wing on rows 1/4, columns 2/5.
    let mut board = parsed(&".".repeat(81));
    for row in [0u8, 3] {
        for col in [0u8, 2, 3, 5, 6, 7, 8] {
            board.eliminate(row * 9 + col, 5).unwrap();
        }
    }
    let solver = Solver::with_techniques(vec![Technique::BasicFish]);

    c.bench_function("basic_fish_search", |b| {
        b.iter(|| hint::black_box(solver.find_step(&board).unwrap()));
    });
}

fn bench_solve_classic(c: &mut Criterion) {
    let solver = Solver::new();
    c.bench_function("solve_classic", |b| {
        b.iter(|| {
            let mut board = parsed(CLASSIC);
            let result = solver.solve(&mut board, 300).unwrap();
            hint::black_box(result.solved)
        });
    });
}

criterion_group!(benches, bench_find_step, bench_fish_search, bench_solve_classic);
criterion_main!(benches);
