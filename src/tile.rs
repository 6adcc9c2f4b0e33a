use std::fmt::Debug;
use std::hash::Hash;

use strum::{Display, EnumIter, VariantArray};

/// Anything that can sit in a board cell and be matched against another cell.
///
/// Equality is the only thing the engine ever asks of a tile; [`glyph`](Tile::glyph) exists so boards can be printed.
pub trait Tile: Copy + Eq + Hash + Debug {
    /// A single character standing in for this tile when a board is printed.
    fn glyph(&self) -> char;
}

/// The built-in palette of eight shapes.
#[derive(Copy, Clone, VariantArray, EnumIter, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    /// A circle, printed `o`.
    Circle,
    /// A square, printed `s`.
    Square,
    /// A triangle, printed `t`.
    Triangle,
    /// A diamond, printed `d`.
    Diamond,
    /// A star, printed `*`.
    Star,
    /// A hexagon, printed `h`.
    Hexagon,
    /// A heart, printed `v`.
    Heart,
    /// A cross, printed `x`.
    Cross,
}

impl Tile for Shape {
    fn glyph(&self) -> char {
        match self {
            Self::Circle => 'o',
            Self::Square => 's',
            Self::Triangle => 't',
            Self::Diamond => 'd',
            Self::Star => '*',
            Self::Hexagon => 'h',
            Self::Heart => 'v',
            Self::Cross => 'x',
        }
    }
}

impl Tile for char {
    fn glyph(&self) -> char {
        *self
    }
}
