use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use derive_more::{Display, Error};
use itertools::Itertools;
use ndarray::{Array2, Ix};

use crate::cell::Cell;
use crate::location::{Coord, Dimension, Location};
use crate::path::Path;
use crate::tile::Tile;

/// Failures of direct queries against a [`Board`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum BoardError {
    /// The location lies outside `[0, size) x [0, size)`.
    #[display("{location} is outside the {size}x{size} board")]
    OutOfRange {
        /// The offending location.
        location: Location,
        /// Side length of the board that was queried.
        size: usize,
    },
}

/// A square grid of tiles together with the set of locations whose tiles have been cleared.
///
/// Tiles never change once placed; clearing a location only records that its tile is gone.
/// [`Board`]s are built with a [`BoardBuilder`](crate::builder::BoardBuilder) or produced by a [`BoardGenerator`](crate::generator::BoardGenerator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<T: Tile> {
    // indexed (row, col)
    pub(crate) tiles: Array2<T>,
    pub(crate) cleared: HashSet<Location>,
    pub(crate) size: Dimension,
}

impl<T: Tile> Board<T> {
    /// Side length of this board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    #[inline]
    fn index_of(&self, location: Location) -> Option<(Ix, Ix)> {
        self.is_on_board(location)
            .then(|| (location.1 as Ix, location.0 as Ix))
    }

    /// Whether `location` lies within `[0, size) x [0, size)`.
    pub fn is_on_board(&self, location: Location) -> bool {
        let size = self.size() as Coord;
        (0..size).contains(&location.0) && (0..size).contains(&location.1)
    }

    /// The tile originally placed at `location`, whether or not it has since been cleared.
    pub fn tile_at(&self, location: Location) -> Result<T, BoardError> {
        self.index_of(location)
            .map(|index| self.tiles[index])
            .ok_or(BoardError::OutOfRange { location, size: self.size() })
    }

    /// The tile still standing at `location`; [`None`] if off-board or cleared.
    pub fn tile(&self, location: Location) -> Option<T> {
        if self.is_cleared(location) {
            return None;
        }

        self.index_of(location).map(|index| self.tiles[index])
    }

    /// Whether the tile at `location` has been cleared. Always `false` off-board.
    #[inline]
    pub fn is_cleared(&self, location: Location) -> bool {
        self.cleared.contains(&location)
    }

    /// Whether a path may run through `location`: it is off-board, or its tile has been cleared.
    #[inline]
    pub fn is_passable(&self, location: Location) -> bool {
        !self.is_on_board(location) || self.is_cleared(location)
    }

    /// Clear the tile at `location`. Clearing an already-cleared location does nothing.
    ///
    /// Returns whether the location was newly cleared.
    pub fn clear(&mut self, location: Location) -> Result<bool, BoardError> {
        if !self.is_on_board(location) {
            return Err(BoardError::OutOfRange { location, size: self.size() });
        }

        Ok(self.cleared.insert(location))
    }

    /// Number of tiles not yet cleared.
    pub fn remaining_count(&self) -> usize {
        self.tiles.len() - self.cleared.len()
    }

    /// Number of tiles cleared so far.
    pub fn cleared_count(&self) -> usize {
        self.cleared.len()
    }

    /// Every on-board location, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.tiles.indexed_iter().map(|(index, _)| Location::from(index))
    }

    /// Every location still holding a tile, in row-major order.
    pub fn standing(&self) -> impl Iterator<Item = (Location, T)> + '_ {
        self.tiles.indexed_iter()
            .map(|(index, tile)| (Location::from(index), *tile))
            .filter(|(location, _)| !self.is_cleared(*location))
    }

    /// A snapshot of the board for drawing, indexed `(row, col)`.
    pub fn cells(&self) -> Array2<Cell<T>> {
        Array2::from_shape_fn(self.tiles.raw_dim(), |index| {
            match self.is_cleared(Location::from(index)) {
                true => Cell::Cleared,
                false => Cell::Tile(self.tiles[index]),
            }
        })
    }

    /// Render this board framed by its off-board lanes, with `path` drawn over it.
    ///
    /// Straight runs are drawn with `-` and `|`, turns and crossings with `+`; the two endpoints keep their glyphs.
    /// Trailing whitespace is trimmed from every line.
    pub fn overlay(&self, path: &Path) -> String {
        let side = self.size() + 2;
        let framed = |location: Location| ((location.1 + 1) as Ix, (location.0 + 1) as Ix);

        let mut canvas = Array2::from_elem((side, side), ' ');
        for (index, cell) in self.cells().indexed_iter() {
            canvas[(index.0 + 1, index.1 + 1)] = cell.glyph();
        }

        let waypoints = path.waypoints();
        for (from, to) in waypoints.iter().tuple_windows() {
            let stroke = if from.1 == to.1 { '-' } else { '|' };
            for location in from.interior_to(*to).into_iter().flatten() {
                let slot = &mut canvas[framed(location)];
                let crossing = matches!(*slot, '-' | '|') && *slot != stroke;
                *slot = if crossing { '+' } else { stroke };
            }
        }

        for corner in &waypoints[1..waypoints.len() - 1] {
            canvas[framed(*corner)] = '+';
        }

        let mut out = String::with_capacity(side * (side + 1));
        for row in canvas.rows() {
            let line = row.iter().collect::<String>();
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

impl<T: Tile> Display for Board<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells().rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
