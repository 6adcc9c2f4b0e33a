use strum::VariantArray;

use crate::tile::{Shape, Tile};

/// Everything needed to deal a fresh board: its size, the tiles to deal from, and optionally a seed.
///
/// Configurations are checked when handed to a [`BoardGenerator`](crate::generator::BoardGenerator), not here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig<T: Tile> {
    /// Side length of the board.
    pub size: usize,
    /// Distinct tiles to deal from; `size * size / 2` of them are used, each twice.
    pub palette: Vec<T>,
    /// Seed for shuffling. [`None`] draws one from the operating system.
    pub seed: Option<u64>,
}

impl<T: Tile> GameConfig<T> {
    /// A configuration for a `size` x `size` board dealt from `palette`.
    pub fn new(size: usize, palette: Vec<T>) -> Self {
        Self { size, palette, seed: None }
    }

    /// Set the side length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the tiles to deal from.
    pub fn with_palette(mut self, palette: Vec<T>) -> Self {
        self.palette = palette;
        self
    }

    /// Make generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig<Shape> {
    /// A 4x4 board using all eight [`Shape`]s.
    fn default() -> Self {
        Self::new(4, Shape::VARIANTS.to_vec())
    }
}
