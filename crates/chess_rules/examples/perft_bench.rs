//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 4 over the whole suite
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth and position, with a per-move split
//!   cargo run --release --example perft_bench -p chess_rules -- 3 "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"

use std::env;
use std::time::{Duration, Instant};

use chess_rules::{Position, divide, perft};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ),
    (
        "Position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(fen) = args.get(2) {
        run_single_position(fen, depth);
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(fen: &str, depth: u8) {
    let pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("Invalid FEN '{fen}': {e}");
            std::process::exit(1);
        }
    };

    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let split = divide(&pos, depth);
    let elapsed = start.elapsed();

    let mut nodes = 0u64;
    for (mv, count) in &split {
        println!("{mv}: {count}");
        nodes += count;
    }

    println!();
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let Ok(pos) = Position::from_fen(fen) else {
            eprintln!("{name}: invalid FEN, skipped");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
