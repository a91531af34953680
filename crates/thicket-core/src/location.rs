//! Grid coordinates.

use std::fmt;

/// A cell coordinate on the simulation grid.
///
/// Rows grow downwards and columns grow to the right. Components are
/// signed so that an out-of-range neighbour can be represented and then
/// rejected by the grid, rather than wrapping around silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Row index, `0..depth` when valid.
    pub row: i32,
    /// Column index, `0..width` when valid.
    pub col: i32,
}

impl Location {
    /// Create a location from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The location shifted by `(dr, dc)`. No bounds checking.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Location) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
