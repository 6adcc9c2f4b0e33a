#![warn(missing_docs)]

//! # `pairlink`
//!
//! The rules engine for "connect the pairs" tile puzzles in the style of [Shisen-Sho](https://en.wikipedia.org/wiki/Shisen-Sho).
//! A player picks two equal tiles; they are removed if a path with at most two right-angle turns joins them through
//! empty cells, where the lanes just outside the board always count as empty.
//!
//! Deal a board with a [`BoardGenerator`](generator::BoardGenerator) (or lay one out by hand with a
//! [`BoardBuilder`](builder::BoardBuilder)), hand it to a [`SelectionController`](controller::SelectionController),
//! and feed it clicks with [`select_cell`](controller::SelectionController::select_cell).
//! Everything to do with pixels, timers, and input devices belongs to the caller.
//!
//! # Internals
//! Path search is a single "is this straight segment clear" check applied to a fixed, ordered list of
//! eight route templates (see [`Route`](path::Route)): straight along a row or column, one corner either way,
//! then out and back through the left, right, top, and bottom lanes.
//! The first template whose segments and corners are all clear wins, which makes the path drawn for a match
//! deterministic. Every query touches at most `O(size)` cells per template.

pub use board::Board;
pub use builder::BoardBuilder;
pub use controller::SelectionController;
pub use error::Error;
pub use location::Location;
pub use path::{find_path, Path};
pub use tile::{Shape, Tile};

pub mod board;
pub mod builder;
pub mod cell;
pub mod config;
pub mod controller;
mod error;
pub mod generator;
pub mod hint;
pub mod location;
pub mod path;
pub mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;
