use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pocket_chess::game_state::game_state::GameState;
use pocket_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for case in CASES_QUICK {
        let game = GameState::from_fen(case.fen).expect("bench fen should parse");
        for (index, expected) in case.expected_nodes.iter().enumerate() {
            let depth = (index + 1) as u8;
            group.throughput(Throughput::Elements(*expected));
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let nodes = perft(black_box(&game), depth);
                        assert_eq!(nodes, *expected);
                        nodes
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
