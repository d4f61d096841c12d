use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use chess_notation::board::board_adapter::BoardAdapter;
use chess_notation::board::chess_types::{
    Color, CompactMove, Coordinate, Piece, PieceKind, PieceOccupancy, PromotionPiece, NO_MOVE,
};
use chess_notation::notation::compact_move::{
    move_from, move_promotion, move_to, pack_compact_move, pack_square_pair,
};
use chess_notation::notation::pgn_move::pgn_move_from_compact;
use chess_notation::notation::simple_algebraic::{
    compact_from_simple_algebraic, simple_algebraic_from_compact,
};
use chess_notation::notation::square_map::square_from_coordinate;

const SAMPLE_COUNT: usize = 1024;
const SAMPLE_SEED: u64 = 0x5EED_0F_C0DE;

fn sampled_moves() -> Vec<CompactMove> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);

    while samples.len() < SAMPLE_COUNT {
        let from = rng.random_range(0..64u8);
        let to = rng.random_range(0..64u8);
        let promotion = match rng.random_range(0..8u8) {
            0 => Some(PromotionPiece::Queen),
            1 => Some(PromotionPiece::Rook),
            2 => Some(PromotionPiece::Bishop),
            3 => Some(PromotionPiece::Knight),
            _ => None,
        };

        let mv = pack_compact_move(from, to, promotion);
        if mv == NO_MOVE {
            continue;
        }
        samples.push(mv);
    }

    samples
}

struct FixtureBoard {
    legal: Vec<CompactMove>,
}

impl BoardAdapter for FixtureBoard {
    fn legal_moves(&self) -> Vec<CompactMove> {
        self.legal.clone()
    }

    fn apply_move(&mut self, _mv: CompactMove) -> bool {
        true
    }

    fn undo_move(&mut self) {}

    fn is_in_check(&self) -> bool {
        false
    }
}

fn sq(name: &str) -> u8 {
    let bytes = name.as_bytes();
    square_from_coordinate(Coordinate {
        file: bytes[0] - b'a',
        rank: 7 - (bytes[1] - b'1'),
    })
}

fn bench_compact_codec(c: &mut Criterion) {
    let samples = sampled_moves();

    // Correctness guard before benchmarking.
    for mv in &samples {
        let repacked = pack_compact_move(move_from(*mv), move_to(*mv), move_promotion(*mv));
        assert_eq!(repacked, *mv);
    }

    let mut group = c.benchmark_group("compact_codec");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("unpack_repack", |b| {
        b.iter(|| {
            let mut accumulator = 0u32;
            for mv in &samples {
                let mv = black_box(*mv);
                accumulator ^= pack_compact_move(move_from(mv), move_to(mv), move_promotion(mv));
            }
            black_box(accumulator)
        });
    });

    group.finish();
}

fn bench_simple_algebraic(c: &mut Criterion) {
    let samples = sampled_moves();
    let rendered: Vec<String> = samples
        .iter()
        .map(|mv| simple_algebraic_from_compact(*mv))
        .collect();

    // Correctness guard before benchmarking.
    for (mv, text) in samples.iter().zip(&rendered) {
        let parsed = compact_from_simple_algebraic(text).expect("rendered move should parse");
        assert_eq!(parsed, *mv);
    }

    let mut group = c.benchmark_group("simple_algebraic");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("render", |b| {
        b.iter(|| {
            let mut total_len = 0usize;
            for mv in &samples {
                total_len += simple_algebraic_from_compact(black_box(*mv)).len();
            }
            black_box(total_len)
        });
    });

    group.bench_function("parse", |b| {
        b.iter(|| {
            let mut accumulator = 0u32;
            for text in &rendered {
                accumulator ^= compact_from_simple_algebraic(black_box(text))
                    .expect("benchmark move should parse");
            }
            black_box(accumulator)
        });
    });

    group.finish();
}

fn bench_pgn_render(c: &mut Criterion) {
    let mut occupancy: PieceOccupancy = [None; 64];
    occupancy[sq("b1") as usize] = Some(Piece {
        color: Color::Light,
        kind: PieceKind::Knight,
    });
    occupancy[sq("f1") as usize] = Some(Piece {
        color: Color::Light,
        kind: PieceKind::Knight,
    });

    let from_b1 = pack_square_pair(sq("b1"), sq("d2"));
    let from_f1 = pack_square_pair(sq("f1"), sq("d2"));
    let mut board = FixtureBoard {
        legal: vec![from_b1, from_f1, NO_MOVE],
    };

    // Correctness guard before benchmarking.
    assert_eq!(pgn_move_from_compact(from_b1, &occupancy, &mut board), "Nbd2");

    let mut group = c.benchmark_group("pgn_render");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(1));

    group.bench_function("knight_disambiguation", |b| {
        b.iter(|| {
            black_box(pgn_move_from_compact(
                black_box(from_b1),
                black_box(&occupancy),
                &mut board,
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compact_codec,
    bench_simple_algebraic,
    bench_pgn_render
);
criterion_main!(benches);
