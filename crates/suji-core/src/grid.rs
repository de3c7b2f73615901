//! The 9×9 digit grid.
//!
//! [`DigitGrid`] is the shared representation all engine operations work
//! over: the solver mutates one in place, the generator produces them, and
//! embedders construct them from raw input. A cell holds `Option<Digit>`,
//! so a constructed grid can never contain an out-of-range value; raw
//! input is validated by [`DigitGrid::from_values`] or the [`FromStr`]
//! implementation before any search can see it.
//!
//! # Grid literals
//!
//! `FromStr` accepts 81 significant characters: `1`-`9` for filled cells,
//! `.`, `_`, or `0` for empty cells. Whitespace is ignored, so grids can
//! be written one row per line:
//!
//! ```
//! use suji_core::DigitGrid;
//!
//! let grid: DigitGrid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//! assert_eq!(grid.filled_count(), 30);
//! # Ok::<(), suji_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Errors from building a grid out of raw cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A cell value was outside the range 0-9.
    #[display("cell value {value} at {position} is outside the range 0-9")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The cell it was supplied for.
        position: Position,
    },
}

/// Errors from parsing a grid literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than `1`-`9`, `.`, `_`, `0`, or whitespace.
    #[display("invalid grid character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The literal did not contain exactly 81 significant characters.
    #[display("expected 81 cells, got {count}")]
    WrongCellCount {
        /// The number of significant characters found.
        count: usize,
    },
}

/// A 9×9 sudoku grid of optional digits.
///
/// Cells are stored in a flat row-major array; `None` is an empty cell.
/// Non-empty cells supplied to the solver are treated as givens and never
/// rewritten by it.
///
/// # Examples
///
/// ```
/// use suji_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid[Position::new(0, 0)], None);
///
/// grid.set(Position::new(0, 0), Digit::D5);
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from raw row-major cell values, `0` meaning empty.
    ///
    /// This is the validation boundary for untrusted numeric input: any
    /// value outside 0-9 is rejected here, before the grid can reach a
    /// search.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] for the first cell value
    /// outside 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use suji_core::{Digit, DigitGrid, Position};
    ///
    /// let mut values = [[0_u8; 9]; 9];
    /// values[2][7] = 4; // row 2, column 7
    /// let grid = DigitGrid::from_values(values)?;
    /// assert_eq!(grid[Position::new(7, 2)], Some(Digit::D4));
    ///
    /// values[0][0] = 12;
    /// assert!(DigitGrid::from_values(values).is_err());
    /// # Ok::<(), suji_core::GridError>(())
    /// ```
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut cells = [None; 81];
        for position in Position::ALL {
            let value = values[usize::from(position.y())][usize::from(position.x())];
            if value != 0 {
                let digit = Digit::try_from_value(value)
                    .ok_or(GridError::ValueOutOfRange { value, position })?;
                cells[position.index()] = Some(digit);
            }
        }
        Ok(Self { cells })
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at `pos`, replacing any previous content.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`, returning its previous content.
    pub const fn clear(&mut self, pos: Position) -> Option<Digit> {
        let previous = self.cells[pos.index()];
        self.cells[pos.index()] = None;
        previous
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Checks that no digit occurs twice in any row, column, or 3×3 box.
    ///
    /// Empty cells are ignored, so a partially filled grid can be
    /// consistent. The solver uses this to reject grids whose givens
    /// already conflict before starting a search.
    ///
    /// # Examples
    ///
    /// ```
    /// use suji_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Digit::D5);
    /// grid.set(Position::new(8, 0), Digit::D5); // same row
    /// assert!(!grid.is_consistent());
    ///
    /// grid.clear(Position::new(8, 0));
    /// assert!(grid.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for i in 0..9 {
            let row = (0..9).map(|x| Position::new(x, i));
            let column = (0..9).map(|y| Position::new(i, y));
            let box_ = (0..9).map(|j| Position::from_box(i, j));
            if !self.house_is_duplicate_free(row)
                || !self.house_is_duplicate_free(column)
                || !self.house_is_duplicate_free(box_)
            {
                return false;
            }
        }
        true
    }

    /// Returns `true` if the grid is a valid full solution: every cell
    /// filled and every row, column, and box containing each digit exactly
    /// once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }

    fn house_is_duplicate_free(&self, house: impl Iterator<Item = Position>) -> bool {
        let mut seen = DigitSet::new();
        for pos in house {
            if let Some(digit) = self.get(pos)
                && !seen.insert(digit)
            {
                return false;
            }
        }
        true
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for character in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(character as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}
