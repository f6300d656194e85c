//! Benchmarks for bitboard position/move-generation performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitboard_core::{Board, MoveList};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Board::starting_position();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| bitboard_core::perft::perft(&mut startpos, black_box(depth)))
        });
    }

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| bitboard_core::perft::perft(&mut kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::starting_position();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            let mut list = MoveList::new();
            black_box(startpos.generate_moves(&mut list))
        })
    });

    let middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -");
    group.bench_function("middlegame", |b| {
        b.iter(|| {
            let mut list = MoveList::new();
            black_box(middlegame.generate_moves(&mut list))
        })
    });

    let kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    group.bench_function("kiwipete", |b| {
        b.iter(|| {
            let mut list = MoveList::new();
            black_box(kiwipete.generate_moves(&mut list))
        })
    });

    group.finish();
}

fn bench_make_unmake(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unmake");

    let mut board = Board::starting_position();
    let mut list = MoveList::new();
    board.generate_moves(&mut list);
    let mv = *list.iter().next().expect("starting position has moves");

    group.bench_function("quiet_roundtrip", |b| {
        b.iter(|| {
            board.make(black_box(mv));
            board.unmake(black_box(mv));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_make_unmake);
criterion_main!(benches);
