//! Cooperative cancellation of a running search.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A cooperative cancellation flag shared between an embedder and a
/// running solve.
///
/// Clones share the same underlying flag, so an embedder can hand one
/// clone to [`BacktrackingSolver::solve_with`] and keep another to
/// [`cancel`](Self::cancel) from a different thread (a UI thread, a
/// timeout watchdog). The solver only ever reads the flag, once per
/// recursion entry, so cancellation takes effect within one search step.
///
/// [`BacktrackingSolver::solve_with`]: crate::BacktrackingSolver::solve_with
///
/// # Examples
///
/// ```
/// use suji_solver::CancelToken;
///
/// let token = CancelToken::new();
/// let shared = token.clone();
/// assert!(!token.is_cancelled());
///
/// shared.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, not-yet-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of any search reading this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
