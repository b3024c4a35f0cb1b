use abchess::{attack, movegen, search, Board, Color, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BOARDS: [(&str, &str); 7] = [
    ("initial", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w",
    ),
    ("open_position", "4r1k1/3R1ppp/8/5P2/p7/6PP/4pK2/1rN1B3 w"),
    ("queen", "6K1/8/8/1k3q2/3Q4/8/8/8 w"),
    ("pawn_attack", "4k3/8/8/pppppppp/PPPPPPPP/8/8/4K3 w"),
    ("pawn_promote", "8/PPPPPPPP/8/2k1K3/8/8/pppppppp/8 w"),
    (
        "cydonia",
        "5K2/1N1N1N2/8/1N1N1N2/1n1n1n2/8/1n1n1n2/5k2 w",
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, fen)| (name, Board::from_fen(fen).unwrap()))
}

fn bench_pseudo_legal(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_legal");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for sq in Square::iter() {
                    black_box(movegen::pseudo_legal(&board, sq).len());
                }
            })
        });
    }
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::all_legal_moves(&board, board.side()).len()))
        });
    }
}

fn bench_apply_revert(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_revert");
    for (name, mut board) in boards() {
        let moves = movegen::all_legal_moves(&board, board.side());
        group.bench_function(name, |b| {
            b.iter(|| {
                for &mv in &moves {
                    let u = board.apply(mv);
                    board.revert(mv, u);
                }
            })
        });
    }
}

fn bench_in_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_check");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for color in [Color::White, Color::Black] {
                    black_box(attack::in_check(&board, color));
                }
            })
        });
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for (name, mut board) in boards() {
        let side = board.side();
        group.bench_function(name, |b| {
            b.iter(|| black_box(search::alpha_beta(&mut board, side, 3)))
        });
    }
}

criterion_group!(
    chess,
    bench_pseudo_legal,
    bench_legal_moves,
    bench_apply_revert,
    bench_in_check,
    bench_search,
);

criterion_main!(chess);
