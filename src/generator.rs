use std::num::NonZero;

use derive_more::{Display, Error};
use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::location::Dimension;
use crate::tile::Tile;

/// Reasons a board cannot be dealt from a given size and palette.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum InvalidConfiguration {
    /// The board would have no cells.
    #[display("board size must be at least 1")]
    ZeroSize,
    /// Tiles come in pairs, so the cell count must be even.
    #[display("a {size}x{size} board has an odd number of cells")]
    OddCellCount {
        /// The requested side length.
        size: usize,
    },
    /// Not enough distinct tiles to give every pair its own.
    #[display("{needed} distinct tiles are needed but the palette has {available}")]
    PaletteTooSmall {
        /// Pairs on the board.
        needed: usize,
        /// Tiles in the palette.
        available: usize,
    },
    /// The board would have more cells than can be counted.
    #[display("a {size}x{size} board is too large")]
    TooLarge {
        /// The requested side length.
        size: usize,
    },
    /// The palette lists some tile more than once, which would deal it four times or more.
    #[display("the palette lists a tile more than once")]
    DuplicateTile,
}

fn validate<T: Tile>(size: usize, palette: &[T]) -> Result<Dimension, InvalidConfiguration> {
    let dimension = NonZero::new(size).ok_or(InvalidConfiguration::ZeroSize)?;

    let cells = size.checked_mul(size).ok_or(InvalidConfiguration::TooLarge { size })?;
    if cells % 2 != 0 {
        return Err(InvalidConfiguration::OddCellCount { size });
    }

    if !palette.iter().all_unique() {
        return Err(InvalidConfiguration::DuplicateTile);
    }

    if palette.len() < cells / 2 {
        return Err(InvalidConfiguration::PaletteTooSmall { needed: cells / 2, available: palette.len() });
    }

    Ok(dimension)
}

fn deal<T: Tile, R: Rng + ?Sized>(size: Dimension, palette: &[T], rng: &mut R) -> Board<T> {
    let side = size.get();

    let mut tiles = palette.choose_multiple(rng, side * side / 2)
        .flat_map(|tile| [*tile, *tile])
        .collect_vec();
    tiles.shuffle(rng);

    Board {
        tiles: Array2::from_shape_fn((side, side), |(row, col)| tiles[row * side + col]),
        cleared: Default::default(),
        size,
    }
}

/// Deal a fresh `size` x `size` board from `palette`, laid out row-major after a uniform shuffle.
///
/// Exactly `size * size / 2` distinct tiles are drawn from `palette` (a uniform sample if it holds more)
/// and each is placed exactly twice. No location starts cleared.
#[instrument(level = "debug", skip(palette, rng), fields(palette = palette.len()))]
pub fn generate<T: Tile, R: Rng + ?Sized>(size: usize, palette: &[T], rng: &mut R) -> Result<Board<T>, InvalidConfiguration> {
    let size = validate(size, palette)?;
    Ok(deal(size, palette, rng))
}

/// A validated [`GameConfig`] together with the random stream boards are dealt from.
///
/// Seeded configurations deal the same sequence of boards every time.
#[derive(Clone, Debug)]
pub struct BoardGenerator<T: Tile> {
    config: GameConfig<T>,
    size: Dimension,
    rng: ChaCha8Rng,
}

impl<T: Tile> BoardGenerator<T> {
    /// Check `config` and prepare to deal from it.
    #[instrument(level = "debug", skip_all, fields(size = config.size, seed = ?config.seed))]
    pub fn new(config: GameConfig<T>) -> Result<Self, InvalidConfiguration> {
        let size = validate(config.size, &config.palette)?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self { config, size, rng })
    }

    /// The configuration boards are dealt from.
    pub fn config(&self) -> &GameConfig<T> {
        &self.config
    }

    /// Deal the next board.
    pub fn generate(&mut self) -> Board<T> {
        let board = deal(self.size, &self.config.palette, &mut self.rng);
        debug!(size = self.size.get(), "dealt board");
        board
    }
}
