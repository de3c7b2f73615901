//! Example demonstrating the backtracking solver.
//!
//! Solves a grid literal supplied on the command line and prints the
//! outcome. The literal uses `1`-`9` for clues and `.`, `_`, or `0` for
//! empty cells; whitespace is ignored.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_grid -- \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Abort long searches with a watchdog timeout:
//!
//! ```sh
//! cargo run --example solve_grid -- --timeout-ms 500 "<grid>"
//! ```
//!
//! Print every tentative placement and retraction:
//!
//! ```sh
//! cargo run --example solve_grid -- --trace "<grid>"
//! ```

use std::{process, thread, time::Duration};

use clap::Parser;
use suji_core::{Digit, DigitGrid, Position};
use suji_solver::{BacktrackingSolver, CancelToken, NullObserver, SearchObserver, SolveOutcome};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid literal: 81 cells, `1`-`9` for clues, `.`/`_`/`0` for empty.
    grid: String,

    /// Cancel the search after this many milliseconds.
    #[arg(long, value_name = "MILLIS")]
    timeout_ms: Option<u64>,

    /// Print every tentative placement and retraction.
    #[arg(long)]
    trace: bool,
}

struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_place(&mut self, pos: Position, digit: Digit) {
        println!("place {digit} at {pos}");
    }

    fn on_clear(&mut self, pos: Position) {
        println!("clear {pos}");
    }
}

fn main() {
    let args = Args::parse();

    let mut grid: DigitGrid = match args.grid.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            process::exit(2);
        }
    };

    let cancel = CancelToken::new();
    if let Some(timeout_ms) = args.timeout_ms {
        let watchdog = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(timeout_ms));
            watchdog.cancel();
        });
    }

    let solver = BacktrackingSolver::new();
    let outcome = if args.trace {
        solver.solve_with(&mut grid, &cancel, &mut TracingObserver)
    } else {
        solver.solve_with(&mut grid, &cancel, &mut NullObserver)
    };

    println!("Outcome:");
    println!("  {outcome}");
    println!();
    println!("Grid:");
    print_grid(&grid);

    if outcome != SolveOutcome::Solved {
        process::exit(1);
    }
}

fn print_grid(grid: &DigitGrid) {
    let compact = grid.to_string();
    for row in compact.as_bytes().chunks(9) {
        println!("  {}", std::str::from_utf8(row).expect("ascii grid"));
    }
}
