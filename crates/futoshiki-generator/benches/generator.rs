//! Benchmarks for Futoshiki puzzle generation.
//!
//! Measures the complete generation pipeline — randomized solution fill,
//! carving, and the solvability gate — for each difficulty tier on a 7×7
//! board. Fixed seeds keep the measurements reproducible while still covering
//! several distinct cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::str::FromStr as _;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futoshiki_core::Size;
use futoshiki_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let size = Size::new(7).unwrap();
    for difficulty in Difficulty::ALL {
        let generator = PuzzleGenerator::new(size, difficulty);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter(|| generator.generate_with_seed(*seed));
                },
            );
        }
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
