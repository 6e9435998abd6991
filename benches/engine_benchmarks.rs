//! Benchmarks for board construction, move generation and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{move_factory, Board, Builder};

const KIWIPETE: &str = "
    r - - - k - - r
    p - p p q p b -
    b n - - p n p -
    - - - P N - - -
    - p - - P - - -
    - - N - - Q - p
    P P P B B P P P
    R - - - K - - R";

fn kiwipete() -> Board {
    KIWIPETE.parse().expect("valid diagram")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    // Starting position
    let board = Board::create_standard_board();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let kiwipete = kiwipete();

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_board_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    // Builds compute both alliances' moves, so this is the movegen cost
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(Builder::standard().build()))
    });

    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(Builder::from_diagram(KIWIPETE).map(Builder::build)))
    });

    group.finish();
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");

    let board = Board::create_standard_board();
    let mv = move_factory::create_move(&board, "e2".parse().unwrap(), "e4".parse().unwrap())
        .expect("e2e4 is generated");
    group.bench_function("startpos_e2e4", |b| {
        b.iter(|| black_box(board.current_player().make_move(black_box(&mv))))
    });

    let kiwipete = kiwipete();
    group.bench_function("kiwipete_valid_moves", |b| {
        b.iter(|| black_box(kiwipete.current_player().valid_moves()))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_board_build, bench_make_move);
criterion_main!(benches);
