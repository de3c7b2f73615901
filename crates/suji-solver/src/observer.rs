//! Per-step observation hooks for external presentation layers.

use suji_core::{Digit, Position};

/// Receives a notification for every tentative placement and retraction
/// made by the search.
///
/// Both hooks default to no-ops, so an observer only implements what it
/// needs. The solver invokes them synchronously with no intrinsic delay;
/// any pacing (animating the search, throttling a render loop) is the
/// embedder's concern and must happen inside the hook, outside the
/// engine.
///
/// Hooks fire only for cells the search fills itself; givens are never
/// reported. On a cancelled search, placements that were never retracted
/// receive no matching [`on_clear`](Self::on_clear).
pub trait SearchObserver {
    /// Called after the search tentatively places `digit` at `pos`.
    fn on_place(&mut self, pos: Position, digit: Digit) {
        let _ = (pos, digit);
    }

    /// Called after the search retracts the placement at `pos`.
    fn on_clear(&mut self, pos: Position) {
        let _ = pos;
    }
}

/// An observer that ignores every notification.
///
/// # Examples
///
/// ```
/// use suji_core::DigitGrid;
/// use suji_solver::{BacktrackingSolver, CancelToken, NullObserver};
///
/// let mut grid = DigitGrid::new();
/// let outcome =
///     BacktrackingSolver::new().solve_with(&mut grid, &CancelToken::new(), &mut NullObserver);
/// assert!(outcome.is_solved());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
