//! Example demonstrating Futoshiki puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a size and difficulty
//! - Generate a random puzzle and display it with its seed
//! - Reproduce a puzzle from a seed
//! - Sample a batch of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6 --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Sample many puzzles and print summary statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use futoshiki_core::Size;
use futoshiki_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size (3-10).
    #[arg(long, value_name = "N", default_value_t = 5)]
    size: u8,

    /// Difficulty tier.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Reproduce the puzzle for a specific seed (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Generate this many puzzles and print summary statistics instead.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match Size::new(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::new(size, args.difficulty.into());

    if let Some(seed) = &args.seed {
        let seed = match seed.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        };
        run_single(&generator, || generator.generate_with_seed(seed));
        return;
    }

    if args.count <= 1 {
        run_single(&generator, || generator.generate());
        return;
    }

    // Each call derives its own PRNG state, so a batch parallelizes freely.
    let failures = (0..args.count)
        .into_par_iter()
        .filter(|_| generator.generate().is_err())
        .count();

    println!("Generated: {}", args.count - failures);
    println!("Failed:    {failures}");
    if failures > 0 {
        process::exit(1);
    }
}

fn run_single<F>(generator: &PuzzleGenerator, generate: F)
where
    F: FnOnce() -> Result<GeneratedPuzzle, futoshiki_generator::GenerateError>,
{
    match generate() {
        Ok(puzzle) => print_puzzle(generator, &puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generator: &PuzzleGenerator, puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!(
        "Problem ({} {}):",
        generator.size(),
        generator.difficulty()
    );
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "Givens: {}  Relations: {}",
        puzzle.problem.given_count(),
        puzzle.problem.relation_count()
    );
}
