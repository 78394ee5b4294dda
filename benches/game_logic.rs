use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dice_merge::core::{find_cluster, generate_pack, resolve_merges, Board, SimpleRng};
use dice_merge::types::{Counters, BOARD_SIZE};

fn bench_resolve_quiet_board(c: &mut Criterion) {
    // Nothing merges: pure scan cost
    let board = Board::from_rows([
        [1, 2, 1, 2, 1],
        [2, 1, 2, 1, 2],
        [1, 2, 1, 2, 1],
        [2, 1, 2, 1, 2],
        [1, 2, 1, 2, 1],
    ]);
    c.bench_function("resolve_quiet_board", |b| {
        b.iter(|| {
            let mut board = board.clone();
            let mut counters = Counters::default();
            resolve_merges(black_box(&mut board), &mut counters)
        })
    });
}

fn bench_resolve_cascade(c: &mut Criterion) {
    // Two chained rounds: the 1s promote into a trio of 2s
    let board = Board::from_rows([
        [1, 1, 1, 0, 0],
        [2, 2, 0, 0, 0],
        [0, 0, 0, 4, 4],
        [0, 0, 0, 4, 0],
        [5, 5, 5, 0, 0],
    ]);
    c.bench_function("resolve_cascade", |b| {
        b.iter(|| {
            let mut board = board.clone();
            let mut counters = Counters::default();
            resolve_merges(black_box(&mut board), &mut counters)
        })
    });
}

fn bench_find_cluster_whole_board(c: &mut Criterion) {
    let board = Board::from_rows([[3; BOARD_SIZE]; BOARD_SIZE]);
    c.bench_function("find_cluster_whole_board", |b| {
        b.iter(|| {
            let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
            find_cluster(black_box(&board), (0, 0), 3, &mut visited)
        })
    });
}

fn bench_generate_pack(c: &mut Criterion) {
    let mut board = Board::new();
    board.set(2, 2, 3);
    let mut rng = SimpleRng::new(12345);
    c.bench_function("generate_pack", |b| {
        b.iter(|| generate_pack(black_box(&board), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_resolve_quiet_board,
    bench_resolve_cascade,
    bench_find_cluster_whole_board,
    bench_generate_pack
);
criterion_main!(benches);
