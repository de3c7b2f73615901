//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a random puzzle and display it with its seed
//! - Regenerate a puzzle from a seed or a phrase
//! - Control how many cells are removed
//! - Sample several puzzles in parallel and keep the hardest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "weekly puzzle 31" --removals 48
//! ```
//!
//! Sample many puzzles and keep the one whose re-solve does the most
//! backtracking work (a crude difficulty proxy):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --sample 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use suji_core::{Digit, DigitGrid, Position};
use suji_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use suji_solver::{BacktrackingSolver, CancelToken, SearchObserver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Regenerate the puzzle for a 64-hex-character seed.
    #[arg(long, value_name = "HEX", conflicts_with_all = ["phrase", "sample"])]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE", conflicts_with = "sample")]
    phrase: Option<String>,

    /// Number of cells to clear from the full solution.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_REMOVALS)]
    removals: usize,

    /// Sample this many random puzzles and keep the hardest.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,
}

/// Counts tentative placements during a solve.
#[derive(Default)]
struct WorkCounter {
    placements: usize,
}

impl SearchObserver for WorkCounter {
    fn on_place(&mut self, _pos: Position, _digit: Digit) {
        self.placements += 1;
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.removals > 81 {
        eprintln!("--removals must be at most 81.");
        process::exit(1);
    }
    let generator = PuzzleGenerator::with_removals(args.removals);

    let seed = match &args.seed {
        Some(hex) => match hex.parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        None => args.phrase.as_deref().map(PuzzleSeed::from_phrase),
    };

    if let Some(seed) = seed {
        let puzzle = generator.generate_with_seed(seed);
        let work = solve_work(&puzzle.problem);
        print_puzzle(&puzzle, work, None);
        return;
    }

    let Some(samples) = args.sample else {
        let puzzle = generator.generate();
        let work = solve_work(&puzzle.problem);
        print_puzzle(&puzzle, work, None);
        return;
    };

    if samples == 0 {
        eprintln!("--sample must be at least 1.");
        process::exit(1);
    }

    let hardest = (0..samples)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate();
            let work = solve_work(&puzzle.problem);
            (puzzle, work)
        })
        .max_by_key(|(_, work)| *work);

    if let Some((puzzle, work)) = hardest {
        print_puzzle(&puzzle, work, Some(samples));
    }
}

/// Re-solves the problem deterministically, counting placements.
fn solve_work(problem: &DigitGrid) -> usize {
    let mut grid = problem.clone();
    let mut counter = WorkCounter::default();
    let outcome = BacktrackingSolver::new().solve_with(&mut grid, &CancelToken::new(), &mut counter);
    assert!(outcome.is_solved());
    counter.placements
}

fn print_puzzle(puzzle: &GeneratedPuzzle, work: usize, samples: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(samples) = samples {
        println!("Selection:");
        println!("  Samples: {samples}");
        println!();
    }

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Stats:");
    println!("  clues: {}", puzzle.problem.filled_count());
    println!("  solve placements: {work}");
}
