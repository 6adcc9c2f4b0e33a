use crate::tile::Tile;

/// A cell as handed to a presentation layer: either still holding its tile, or cleared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell<T: Tile> {
    /// The cell still holds this tile.
    Tile(T),
    /// The tile here was matched and removed.
    Cleared,
}

impl<T: Tile> Cell<T> {
    /// The tile in this cell, if it has not been cleared.
    pub fn tile(&self) -> Option<T> {
        match self {
            Self::Tile(tile) => Some(*tile),
            Self::Cleared => None,
        }
    }

    pub(crate) fn glyph(&self) -> char {
        match self {
            Self::Tile(tile) => tile.glyph(),
            Self::Cleared => '.',
        }
    }
}
