//! Placement validity checking.

use suji_core::{Digit, DigitGrid, Position};

/// Checks whether `digit` can be placed at `pos` without violating the
/// row, column, or 3×3 box constraint.
///
/// The check scans the current grid contents: all 9 cells of the row, the
/// column, and the box containing `pos`, including `pos` itself. The
/// caller must therefore only call this on an empty target cell; the
/// search does, since it only ever validates cells it is about to fill.
/// Debug builds assert the contract.
///
/// # Examples
///
/// ```
/// use suji_core::{Digit, DigitGrid, Position};
/// use suji_solver::is_valid_placement;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Digit::D5);
///
/// // 5 is taken in row 0 and in the top-left box
/// assert!(!is_valid_placement(&grid, Position::new(8, 0), Digit::D5));
/// assert!(!is_valid_placement(&grid, Position::new(1, 1), Digit::D5));
/// assert!(is_valid_placement(&grid, Position::new(8, 0), Digit::D6));
/// ```
#[must_use]
pub fn is_valid_placement(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    debug_assert!(grid.get(pos).is_none(), "target cell must be empty");

    for x in 0..9 {
        if grid.get(Position::new(x, pos.y())) == Some(digit) {
            return false;
        }
    }
    for y in 0..9 {
        if grid.get(Position::new(pos.x(), y)) == Some(digit) {
            return false;
        }
    }
    let box_index = pos.box_index();
    for i in 0..9 {
        if grid.get(Position::from_box(box_index, i)) == Some(digit) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_grid_accepts_everything() {
        let grid = DigitGrid::new();
        for pos in Position::ALL {
            for digit in Digit::ALL {
                assert!(is_valid_placement(&grid, pos, digit));
            }
        }
    }

    #[test]
    fn test_row_conflict() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(2, 4), Digit::D7);
        assert!(!is_valid_placement(&grid, Position::new(8, 4), Digit::D7));
        assert!(is_valid_placement(&grid, Position::new(8, 4), Digit::D6));
    }

    #[test]
    fn test_column_conflict() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(6, 1), Digit::D3);
        assert!(!is_valid_placement(&grid, Position::new(6, 8), Digit::D3));
        assert!(is_valid_placement(&grid, Position::new(6, 8), Digit::D4));
    }

    #[test]
    fn test_box_conflict() {
        let mut grid = DigitGrid::new();
        // (3, 3) and (5, 5) share the centre box but no row or column
        grid.set(Position::new(3, 3), Digit::D9);
        assert!(!is_valid_placement(&grid, Position::new(5, 5), Digit::D9));
        assert!(is_valid_placement(&grid, Position::new(5, 5), Digit::D8));
    }

    #[test]
    fn test_cleared_cell_of_a_solution_admits_only_its_digit() {
        let mut grid: DigitGrid =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .expect("valid grid literal");
        let pos = Position::new(0, 0);
        grid.clear(pos);

        for digit in Digit::ALL {
            assert_eq!(
                is_valid_placement(&grid, pos, digit),
                digit == Digit::D5,
                "only the removed digit may fit in a solved grid, got {digit}"
            );
        }
    }

    proptest! {
        // Transposing the grid swaps rows with columns and maps boxes onto
        // boxes, so validity is preserved under it.
        #[test]
        fn transposition_preserves_validity(
            placements in proptest::collection::vec((0_u8..9, 0_u8..9, 1_u8..=9), 0..40),
            x in 0_u8..9,
            y in 0_u8..9,
            value in 1_u8..=9,
        ) {
            let mut grid = DigitGrid::new();
            let mut transposed = DigitGrid::new();
            for (px, py, v) in placements {
                let digit = Digit::from_value(v);
                grid.set(Position::new(px, py), digit);
                transposed.set(Position::new(py, px), digit);
            }
            grid.clear(Position::new(x, y));
            transposed.clear(Position::new(y, x));

            let digit = Digit::from_value(value);
            prop_assert_eq!(
                is_valid_placement(&grid, Position::new(x, y), digit),
                is_valid_placement(&transposed, Position::new(y, x), digit),
            );
        }
    }
}
