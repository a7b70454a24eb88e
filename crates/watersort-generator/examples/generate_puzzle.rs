//! Example demonstrating water sort puzzle generation.
//!
//! This example shows how to:
//! - Generate the puzzle of a level from a random or fixed seed
//! - Display the arrangement, difficulty, and seed
//! - Sample many puzzles in parallel and report opening-move statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level 12
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample puzzles and keep the one with the fewest legal opening pours:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level 15 --samples 10000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use watersort_core::{Arrangement, Level};
use watersort_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level whose difficulty is used.
    #[arg(long, value_name = "N", default_value_t = 1)]
    level: u32,

    /// Seed to generate from. A random seed is used when omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Number of random puzzles to sample.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Stats {
    opening_pours: usize,
    complete_containers: usize,
}

fn main() {
    let args = Args::parse();
    let Some(level) = Level::new(args.level) else {
        eprintln!("--level must be at least 1.");
        process::exit(1);
    };
    let generator = PuzzleGenerator::new();

    let Some(samples) = args.samples else {
        let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
        let puzzle = generator.generate_level(level, seed);
        let stats = stats(&puzzle.arrangement);
        print_puzzle(level, &puzzle, stats, None);
        return;
    };

    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let sampled = (0..samples)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate_level(level, PuzzleSeed::random());
            let stats = stats(&puzzle.arrangement);
            (puzzle, stats)
        })
        .collect::<Vec<_>>();

    #[expect(clippy::cast_precision_loss)]
    let mean = sampled
        .iter()
        .map(|(_, stats)| stats.opening_pours)
        .sum::<usize>() as f64
        / samples as f64;

    if let Some((puzzle, stats)) = sampled
        .into_iter()
        .min_by_key(|(_, stats)| stats.opening_pours)
    {
        print_puzzle(level, &puzzle, stats, Some((samples, mean)));
    }
}

fn stats(arrangement: &Arrangement) -> Stats {
    let n = arrangement.len();
    let opening_pours = (0..n)
        .flat_map(|from| (0..n).map(move |to| (from, to)))
        .filter(|&(from, to)| from != to && arrangement.pour_capability(from, to).is_ok())
        .count();
    let complete_containers = arrangement
        .containers()
        .iter()
        .filter(|container| container.is_complete())
        .count();
    Stats {
        opening_pours,
        complete_containers,
    }
}

fn print_puzzle(
    level: Level,
    puzzle: &GeneratedPuzzle,
    stats: Stats,
    selection: Option<(usize, f64)>,
) {
    let difficulty = Difficulty::for_level(level);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!("  Level: {level}");
    println!("  Tier: {}", difficulty.tier);
    println!("  Colors: {}", difficulty.color_count);
    println!("  Containers: {}", difficulty.container_count);
    println!();

    if let Some((samples, mean)) = selection {
        println!("Selection:");
        println!("  Samples: {samples}");
        println!("  Mean opening pours: {mean:.2}");
        println!();
    }

    println!("Arrangement:");
    println!("  {}", puzzle.arrangement);
    println!();

    println!("Stats:");
    println!("  opening pours: {}", stats.opening_pours);
    println!("  complete containers: {}", stats.complete_containers);
}
