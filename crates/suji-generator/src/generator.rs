//! Randomized full-grid construction and clue removal.

use log::debug;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use suji_core::{Digit, DigitGrid, Position};
use suji_solver::is_valid_placement;

use crate::seed::PuzzleSeed;

/// A generated puzzle together with the solution it was carved from and
/// the seed that reproduces both.
///
/// The problem grid is the solution with a number of cells cleared. Every
/// clue matches the solution, so the problem is solvable by construction;
/// it is not guaranteed to have a *unique* solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The clue grid handed to players.
    pub problem: DigitGrid,
    /// The full solution the clues were taken from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Sudoku puzzle generator.
///
/// Generation builds a random full solution with a backtracking search
/// whose candidate order is shuffled per cell, then clears a configured
/// number of randomly chosen cells. All randomness comes from a
/// [`PuzzleSeed`], so every puzzle can be regenerated from its seed alone.
///
/// # Examples
///
/// ```
/// use suji_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doc example"));
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle.problem.filled_count(), 41); // 81 - 40 removals
///
/// // Same seed, same puzzle
/// let again = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    removals: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// The number of cells cleared by default.
    pub const DEFAULT_REMOVALS: usize = 40;

    /// Creates a generator clearing [`DEFAULT_REMOVALS`](Self::DEFAULT_REMOVALS)
    /// cells per puzzle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            removals: Self::DEFAULT_REMOVALS,
        }
    }

    /// Creates a generator clearing `removals` cells per puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `removals` is greater than 81.
    #[must_use]
    pub const fn with_removals(removals: usize) -> Self {
        assert!(removals <= 81);
        Self { removals }
    }

    /// Returns the number of cells cleared per puzzle.
    #[must_use]
    pub const fn removals(&self) -> usize {
        self.removals
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        debug!("generating puzzle from seed {seed}");
        let mut rng = seed.rng();

        let solution = fill_grid(&mut rng);
        let mut problem = solution.clone();
        remove_clues(&mut problem, self.removals, &mut rng);

        // Removal only deletes information, so the solution still fits.
        #[cfg(debug_assertions)]
        {
            let mut feasibility_check = problem.clone();
            debug_assert!(
                suji_solver::BacktrackingSolver::new()
                    .solve(&mut feasibility_check)
                    .is_solved(),
            );
        }

        debug!(
            "generated puzzle with {} clues from seed {seed}",
            problem.filled_count()
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Builds a complete, constraint-valid grid from an empty one.
///
/// Same recursive backtracking as solving, except the nine candidates are
/// shuffled into a uniformly random order at each cell; repeated calls
/// with independently seeded generators produce different solutions. A
/// full valid grid always exists, so this never fails.
///
/// # Examples
///
/// ```
/// use suji_generator::{PuzzleSeed, fill_grid};
///
/// let grid = fill_grid(&mut PuzzleSeed::from_phrase("doc example").rng());
/// assert!(grid.is_solved());
/// ```
pub fn fill_grid<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, 0, rng);
    debug_assert!(filled, "a full valid grid always exists");
    grid
}

fn fill_from<R: Rng + ?Sized>(grid: &mut DigitGrid, index: usize, rng: &mut R) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);
    if grid.get(pos).is_some() {
        return fill_from(grid, index + 1, rng);
    }

    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if !is_valid_placement(grid, pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        if fill_from(grid, index + 1, rng) {
            return true;
        }
        grid.clear(pos);
    }
    false
}

/// Clears exactly `count` uniformly chosen filled cells in place.
///
/// Cells are sampled with resampling: an already empty cell is skipped
/// and a new one drawn, so no cell is cleared twice and exactly `count`
/// clues disappear.
///
/// # Panics
///
/// Panics if `count` exceeds the number of filled cells.
///
/// # Examples
///
/// ```
/// use suji_generator::{PuzzleSeed, fill_grid, remove_clues};
///
/// let mut rng = PuzzleSeed::from_phrase("doc example").rng();
/// let mut grid = fill_grid(&mut rng);
/// remove_clues(&mut grid, 40, &mut rng);
/// assert_eq!(grid.filled_count(), 41);
/// ```
pub fn remove_clues<R: Rng + ?Sized>(grid: &mut DigitGrid, count: usize, rng: &mut R) {
    assert!(
        count <= grid.filled_count(),
        "cannot remove {count} clues from a grid with {} filled cells",
        grid.filled_count(),
    );

    let mut removed = 0;
    while removed < count {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if grid.clear(pos).is_some() {
            removed += 1;
        }
    }
}
