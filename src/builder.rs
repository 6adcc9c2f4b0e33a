use std::collections::HashSet;
use std::num::NonZero;

use derive_more::{Display, Error};
use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::location::{Coord, Dimension, Location};
use crate::tile::Tile;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile or clear mark was placed outside the bounds specified by the builder's size.
    #[display("feature at {_0} is out of bounds")]
    FeatureOutOfBounds(Location),
    /// A row given to [`BoardBuilder::from_rows`] does not have exactly as many cells as there are rows.
    #[display("row {_0} does not match the board size")]
    RaggedRow(usize),
    /// [`BoardBuilder::from_rows`] was given no rows at all.
    #[display("a board needs at least one row")]
    Empty,
    /// No tile was ever placed here.
    #[display("no tile placed at {_0}")]
    Unfilled(Location),
}

/// Returned by [`BoardBuilder::build`] when the builder is in an invalid state.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("cannot build board: {}", reasons.iter().join(", "))]
pub struct BuildError {
    /// Every reason recorded, in the order they arose.
    pub reasons: Vec<BuilderInvalidReason>,
}

/// A builder for hand-made boards, chiefly for tests and fixed puzzles.
///
/// Unlike the [`generator`](crate::generator), a builder does not insist that every tile appears exactly twice;
/// it only requires that every cell ends up holding something.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct BoardBuilder<T: Tile> {
    size: Dimension,
    cells: Array2<Option<T>>,
    cleared: HashSet<Location>,
    // most recent last, for pop_pair
    pairs: Vec<(Location, Location)>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl<T: Tile> BoardBuilder<T> {
    /// Construct an empty builder for a `size` x `size` board.
    pub fn with_size(size: Dimension) -> Self {
        Self {
            size,
            cells: Array2::from_elem((size.get(), size.get()), None),
            cleared: Default::default(),
            pairs: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        let size = self.size.get() as Coord;
        (0..size).contains(&location.0) && (0..size).contains(&location.1)
    }

    /// Put `tile` at `location`, replacing whatever was there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, location: Location, tile: T) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        self.cells[(location.1 as usize, location.0 as usize)] = Some(tile);
        self
    }

    /// Place `tile` at both `locations`. The order in which `locations` are specified does not matter.
    ///
    /// Same failure conditions as [`Self::place`].
    pub fn add_pair(&mut self, tile: T, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.in_bounds(location) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
                return self;
            }
        }

        self.place(locations.0, tile).place(locations.1, tile);
        self.pairs.push(locations);
        self
    }

    /// Remove the most recently added pair.
    ///
    /// If the builder is in an invalid state or no pairs are present, this function does nothing.
    pub fn pop_pair(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some((a, b)) = self.pairs.pop() {
            for location in [a, b] {
                self.cells[(location.1 as usize, location.0 as usize)] = None;
                self.cleared.remove(&location);
            }
        }

        self
    }

    /// Mark `location` as already cleared. A tile must still be placed there before building.
    ///
    /// Same failure conditions as [`Self::place`].
    pub fn clear(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        self.cleared.insert(location);
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Cells left unfilled are only detected by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn unfilled(&self) -> Vec<BuilderInvalidReason> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| BuilderInvalidReason::Unfilled(Location::from(index)))
            .collect_vec()
    }

    /// Convert the state of this builder into a [`Board`].
    pub fn build(&self) -> Result<Board<T>, BuildError> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError { reasons: self.invalid_reasons.clone() });
        }

        // the shape only fails to fit when some cell was skipped
        let tiles = self.cells.iter().flatten().copied().collect_vec();
        let tiles = Array2::from_shape_vec(self.cells.raw_dim(), tiles)
            .map_err(|_| BuildError { reasons: self.unfilled() })?;

        Ok(Board {
            tiles,
            cleared: self.cleared.clone(),
            size: self.size,
        })
    }
}

impl BoardBuilder<char> {
    /// Lay out a board of `char` tiles from text, one string per row.
    ///
    /// A `.` stands for a cell that has already been cleared.
    /// The number of rows sets the board size, and every row must be exactly that long.
    pub fn from_rows(rows: &[&str]) -> Self {
        let Some(size) = NonZero::new(rows.len()) else {
            let mut builder = Self::with_size(NonZero::<usize>::MIN);
            builder.invalid_reasons.push(BuilderInvalidReason::Empty);
            return builder;
        };

        let mut builder = Self::with_size(size);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size.get() {
                builder.invalid_reasons.push(BuilderInvalidReason::RaggedRow(y));
                return builder;
            }

            for (x, glyph) in row.chars().enumerate() {
                let location = Location(x as Coord, y as Coord);
                builder.place(location, glyph);
                if glyph == '.' {
                    builder.clear(location);
                }
            }
        }

        builder
    }
}
