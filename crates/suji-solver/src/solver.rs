//! Backtracking depth-first search over the grid.

use suji_core::{Digit, DigitGrid, Position};

use crate::{CancelToken, NullObserver, SearchObserver, validator::is_valid_placement};

/// The result of a solve call.
///
/// `Unsolvable` is a routine outcome, not a fault: arbitrary clue grids
/// often have no completion. `Cancelled` is kept distinct so embedders can
/// tell a user abort from genuine infeasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A completion was found; the grid is fully filled.
    #[display("solved")]
    Solved,
    /// No completion exists; the grid was restored to its input state.
    #[display("unsolvable")]
    Unsolvable,
    /// The cancellation token was set; the grid is in an unspecified
    /// partial state.
    #[display("cancelled")]
    Cancelled,
}

/// Depth-first backtracking solver.
///
/// The search visits cells in row-major order. Non-empty cells are givens:
/// they are skipped without validation and never rewritten. At each empty
/// cell the candidates 1-9 are tried in ascending order; a candidate that
/// passes [`is_valid_placement`] is placed and the search recurses to the
/// next cell. The first completion found wins. A failed branch clears
/// every cell it filled before returning, so an [`Unsolvable`] result
/// leaves the grid exactly as supplied.
///
/// Worst-case time is exponential in the number of empty cells; real
/// puzzles resolve quickly because invalid candidates prune early.
///
/// [`Unsolvable`]: SolveOutcome::Unsolvable
///
/// # Examples
///
/// ```
/// use suji_core::{Digit, DigitGrid, Position};
/// use suji_solver::{BacktrackingSolver, SolveOutcome};
///
/// let mut grid: DigitGrid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
/// assert!(grid.is_solved());
/// assert_eq!(grid[Position::new(2, 0)], Some(Digit::D4));
/// # Ok::<(), suji_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves `grid` in place without cancellation or observation.
    ///
    /// Equivalent to [`solve_with`](Self::solve_with) with a fresh token
    /// and a [`NullObserver`].
    pub fn solve(&self, grid: &mut DigitGrid) -> SolveOutcome {
        self.solve_with(grid, &CancelToken::new(), &mut NullObserver)
    }

    /// Solves `grid` in place, reporting each placement and retraction to
    /// `observer` and aborting promptly once `cancel` is set.
    ///
    /// Grids whose givens already conflict (a digit twice in one house)
    /// are reported [`Unsolvable`] without searching, untouched; searching
    /// around such a conflict could only ever produce a completion that
    /// still contains it.
    ///
    /// On [`Solved`] every cell is filled. On [`Unsolvable`] the grid is
    /// restored to its input state. On [`Cancelled`] the grid keeps
    /// whatever partial placements it had when the token was observed.
    ///
    /// [`Solved`]: SolveOutcome::Solved
    /// [`Unsolvable`]: SolveOutcome::Unsolvable
    /// [`Cancelled`]: SolveOutcome::Cancelled
    ///
    /// # Examples
    ///
    /// ```
    /// use suji_core::DigitGrid;
    /// use suji_solver::{BacktrackingSolver, CancelToken, NullObserver, SolveOutcome};
    ///
    /// let mut grid = DigitGrid::new();
    /// let cancel = CancelToken::new();
    /// cancel.cancel();
    ///
    /// let outcome = BacktrackingSolver::new().solve_with(&mut grid, &cancel, &mut NullObserver);
    /// assert_eq!(outcome, SolveOutcome::Cancelled);
    /// assert!(!grid.is_complete());
    /// ```
    pub fn solve_with(
        &self,
        grid: &mut DigitGrid,
        cancel: &CancelToken,
        observer: &mut dyn SearchObserver,
    ) -> SolveOutcome {
        if !grid.is_consistent() {
            return SolveOutcome::Unsolvable;
        }
        search(grid, 0, cancel, observer)
    }
}

/// One recursion frame per cell, at most 81 deep.
fn search(
    grid: &mut DigitGrid,
    index: usize,
    cancel: &CancelToken,
    observer: &mut dyn SearchObserver,
) -> SolveOutcome {
    if cancel.is_cancelled() {
        return SolveOutcome::Cancelled;
    }
    if index == 81 {
        return SolveOutcome::Solved;
    }

    let pos = Position::from_index(index);
    if grid.get(pos).is_some() {
        // A given: skipped, never validated or rewritten.
        return search(grid, index + 1, cancel, observer);
    }

    for digit in Digit::ALL {
        if !is_valid_placement(grid, pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        observer.on_place(pos, digit);
        match search(grid, index + 1, cancel, observer) {
            SolveOutcome::Solved => return SolveOutcome::Solved,
            // Leave the partial state in place for the embedder to inspect.
            SolveOutcome::Cancelled => return SolveOutcome::Cancelled,
            SolveOutcome::Unsolvable => {
                grid.clear(pos);
                observer.on_clear(pos);
            }
        }
    }
    SolveOutcome::Unsolvable
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUES: &str = "
        53. .7. ...
        6.. 195 ...
        .98 ... .6.
        8.. .6. ..3
        4.. 8.3 ..1
        7.. .2. ..6
        .6. ... 28.
        ... 419 ..5
        ... .8. .79
    ";
    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn clue_grid() -> DigitGrid {
        CLUES.parse().expect("valid grid literal")
    }

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().expect("valid grid literal")
    }

    /// Counts placements and retractions, mirroring them onto a copy grid.
    #[derive(Default)]
    struct RecordingObserver {
        mirror: DigitGrid,
        places: usize,
        clears: usize,
    }

    impl SearchObserver for RecordingObserver {
        fn on_place(&mut self, pos: Position, digit: Digit) {
            self.mirror.set(pos, digit);
            self.places += 1;
        }

        fn on_clear(&mut self, pos: Position) {
            self.mirror.clear(pos);
            self.clears += 1;
        }
    }

    /// Sets the cancellation token after a fixed number of placements.
    struct CancelAfter {
        token: CancelToken,
        remaining: usize,
    }

    impl SearchObserver for CancelAfter {
        fn on_place(&mut self, _pos: Position, _digit: Digit) {
            if self.remaining == 0 {
                self.token.cancel();
            } else {
                self.remaining -= 1;
            }
        }
    }

    #[test]
    fn test_solves_the_canonical_puzzle() {
        let mut grid = clue_grid();
        assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
        assert_eq!(grid, solved_grid());
    }

    #[test]
    fn test_givens_survive_solving() {
        let clues = clue_grid();
        let mut grid = clues.clone();
        BacktrackingSolver::new().solve(&mut grid);

        for pos in Position::ALL {
            if let Some(given) = clues[pos] {
                assert_eq!(grid[pos], Some(given), "given at {pos} was rewritten");
            }
        }
    }

    #[test]
    fn test_full_valid_grid_solves_unchanged() {
        let mut grid = solved_grid();
        assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
        assert_eq!(grid, solved_grid());
    }

    #[test]
    fn test_resolving_is_idempotent() {
        let solver = BacktrackingSolver::new();
        let mut grid = clue_grid();
        assert_eq!(solver.solve(&mut grid), SolveOutcome::Solved);
        let first = grid.clone();
        assert_eq!(solver.solve(&mut grid), SolveOutcome::Solved);
        assert_eq!(grid, first);
    }

    #[test]
    fn test_empty_grid_has_a_solution() {
        let mut grid = DigitGrid::new();
        assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
        assert!(grid.is_solved());
        // Ascending candidate order fills row 0 left to right
        for (x, digit) in Digit::ALL.into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::new(x as u8, 0);
            assert_eq!(grid[pos], Some(digit));
        }
    }

    #[test]
    fn test_cleared_cell_is_restored() {
        let mut grid = solved_grid();
        grid.clear(Position::new(0, 0));
        assert_eq!(BacktrackingSolver::new().solve(&mut grid), SolveOutcome::Solved);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid, solved_grid());
    }

    #[test]
    fn test_conflicting_givens_are_unsolvable_without_search() {
        // Two 5s in row 0
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D5);
        grid.set(Position::new(4, 0), Digit::D5);
        let before = grid.clone();

        let mut observer = RecordingObserver::default();
        let outcome = BacktrackingSolver::new().solve_with(
            &mut grid,
            &CancelToken::new(),
            &mut observer,
        );

        assert_eq!(outcome, SolveOutcome::Unsolvable);
        assert_eq!(grid, before);
        assert_eq!(observer.places, 0, "no search may run on conflicting givens");
    }

    #[test]
    fn test_unsolvable_grid_is_restored_exactly() {
        // Row 0 leaves {1, 2, 9} for its three empty cells, but column 8
        // already holds all three, so (8, 0) can never be filled.
        let mut grid: DigitGrid = "
            ..3 456 78.
            ... ... ...
            ... ... ...
            ... ... ..1
            ... ... ..2
            ... ... ..9
            ... ... ...
            ... ... ...
            ... ... ...
        "
        .parse()
        .expect("valid grid literal");
        assert!(grid.is_consistent());
        let before = grid.clone();

        let mut observer = RecordingObserver::default();
        let outcome = BacktrackingSolver::new().solve_with(
            &mut grid,
            &CancelToken::new(),
            &mut observer,
        );

        assert_eq!(outcome, SolveOutcome::Unsolvable);
        assert_eq!(grid, before, "failed search must leave no residue");
        assert!(observer.places > 0, "this grid requires actual backtracking");
        assert_eq!(observer.places, observer.clears);
    }

    #[test]
    fn test_pre_cancelled_solve_returns_promptly() {
        let mut grid = DigitGrid::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut observer = RecordingObserver::default();
        let outcome = BacktrackingSolver::new().solve_with(&mut grid, &cancel, &mut observer);

        assert_eq!(outcome, SolveOutcome::Cancelled);
        assert_eq!(observer.places, 0);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_cancellation_mid_search_keeps_partial_state() {
        let mut grid = DigitGrid::new();
        let cancel = CancelToken::new();
        let mut observer = CancelAfter {
            token: cancel.clone(),
            remaining: 10,
        };

        let outcome = BacktrackingSolver::new().solve_with(&mut grid, &cancel, &mut observer);

        assert_eq!(outcome, SolveOutcome::Cancelled);
        assert!(!grid.is_complete(), "cancelled solve must not finish the grid");
        assert!(grid.filled_count() > 0, "placements are not rolled back");
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_observer_events_mirror_the_search() {
        let mut grid = clue_grid();
        let mut observer = RecordingObserver {
            mirror: grid.clone(),
            ..RecordingObserver::default()
        };

        let outcome = BacktrackingSolver::new().solve_with(
            &mut grid,
            &CancelToken::new(),
            &mut observer,
        );

        assert_eq!(outcome, SolveOutcome::Solved);
        // Replaying every on_place/on_clear over the clues reproduces the
        // solution, so the events describe the search completely.
        assert_eq!(observer.mirror, grid);
        assert_eq!(observer.places - observer.clears, 51); // 81 - 30 givens
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(SolveOutcome::Solved.is_solved());
        assert!(SolveOutcome::Unsolvable.is_unsolvable());
        assert!(SolveOutcome::Cancelled.is_cancelled());
        assert_eq!(SolveOutcome::Unsolvable.to_string(), "unsolvable");
    }
}
