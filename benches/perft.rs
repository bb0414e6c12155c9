use std::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use damson_chess::{AttackTables, Board, perft};

/*----------------------------------------------------------------*/

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn bench_perft(c: &mut Criterion) {
    let tables = AttackTables::new();

    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");
        let depth = case.expected_nodes.len() as u32;
        let expected = *case.expected_nodes.last().unwrap();

        // Correctness guard before measuring anything.
        let mut warmup = board.clone();
        assert_eq!(perft(&mut warmup, &tables, depth), expected);

        group.throughput(Throughput::Elements(expected));
        group.bench_function(format!("{}_d{}", case.name, depth), |b| {
            b.iter(|| {
                let mut board = board.clone();
                let nodes = perft(black_box(&mut board), &tables, black_box(depth));

                assert_eq!(nodes, expected);
                nodes
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
