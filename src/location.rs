use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// Signed so that the lanes just outside the board (`-1` and `size`) are addressable.
pub type Coord = isize;
/// Side length of a (square) board.
pub type Dimension = NonZero<usize>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(col, row)` on or just around a board. The top left corner is `Location(0, 0)`.
///
/// Locations with a coordinate of `-1` or `size` sit in the off-board lanes used by perimeter routes.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }

    /// The column of this location.
    #[inline]
    pub fn col(&self) -> Coord {
        self.0
    }

    /// The row of this location.
    #[inline]
    pub fn row(&self) -> Coord {
        self.1
    }

    /// Whether `self` and `other` share a row or a column.
    pub fn is_collinear_with(&self, other: Location) -> bool {
        self.0 == other.0 || self.1 == other.1
    }

    /// Every location strictly between `self` and `other`, walking from `self`.
    ///
    /// Returns [`None`] if the two do not share a row or column.
    /// Adjacent (or equal) locations yield an empty run.
    pub fn interior_to(&self, other: Location) -> Option<Vec<Location>> {
        if !self.is_collinear_with(other) {
            return None;
        }

        let step = ((other.0 - self.0).signum(), (other.1 - self.1).signum());
        let span = (other.0 - self.0).abs().max((other.1 - self.1).abs());

        let mut out = Vec::with_capacity((span - 1).max(0) as usize);
        let mut cursor = self.offset_by(step);
        for _ in 1..span {
            out.push(cursor);
            cursor = cursor.offset_by(step);
        }

        Some(out)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(Ix, Ix)> for Location {
    /// Converts an ndarray `(row, col)` index.
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1 as Coord, value.0 as Coord)
    }
}
