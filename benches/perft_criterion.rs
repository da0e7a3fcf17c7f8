use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rankfile_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use rankfile_rules::move_generation::perft::{perft, perft_multi_threaded, PerftCounts};
use rankfile_rules::{ChessResult, Position};

/// Reference position with published node counts, one per depth from 1.
struct PerftReference {
    label: &'static str,
    fen: &'static str,
    nodes_by_depth: &'static [u64],
    /// Deepest depth run by the default quick suite.
    quick_depth: usize,
}

const REFERENCES: &[PerftReference] = &[
    PerftReference {
        label: "startpos",
        fen: STARTING_POSITION_FEN,
        nodes_by_depth: &[20, 400, 8902, 197_281],
        quick_depth: 3,
    },
    PerftReference {
        label: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes_by_depth: &[48, 2039, 97_862],
        quick_depth: 2,
    },
    PerftReference {
        label: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes_by_depth: &[14, 191, 2812, 43_238],
        quick_depth: 3,
    },
    PerftReference {
        label: "promotion_heavy",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        nodes_by_depth: &[6, 264, 9467],
        quick_depth: 2,
    },
    PerftReference {
        label: "check_heavy",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        nodes_by_depth: &[44, 1486, 62_379],
        quick_depth: 2,
    },
];

/// `RANKFILE_BENCH_SUITE=full` runs every published depth.
fn full_suite() -> bool {
    std::env::var("RANKFILE_BENCH_SUITE").is_ok_and(|value| value.eq_ignore_ascii_case("full"))
}

fn bench_variant(
    c: &mut Criterion,
    variant: &str,
    count: fn(&Position, u8) -> ChessResult<PerftCounts>,
) {
    let full = full_suite();
    let mut group = c.benchmark_group(format!("perft_{variant}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for reference in REFERENCES {
        let position = Position::from_fen(reference.fen).expect("reference FEN should parse");
        let depths = if full {
            reference.nodes_by_depth.len()
        } else {
            reference.quick_depth
        };

        for (depth, &expected) in (1u8..).zip(&reference.nodes_by_depth[..depths]) {
            let nodes = count(&position, depth).expect("perft should run").nodes as u64;
            assert_eq!(nodes, expected, "{} depth {depth} disagrees with reference", reference.label);

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::new(reference.label, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        count(black_box(&position), black_box(depth))
                            .expect("perft benchmark run should succeed")
                            .nodes
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    bench_variant(c, "single", perft);
    bench_variant(c, "threaded", perft_multi_threaded);
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
