//! Bindings for driving a game from JavaScript. Drawing stays on the JavaScript side.

use itertools::Itertools;
use js_sys::{Int32Array, Math};
use strum::VariantArray;
use wasm_bindgen::prelude::*;

use crate::cell::Cell;
use crate::config::GameConfig;
use crate::controller::{GameOutcome, SelectionController};
use crate::generator::BoardGenerator;
use crate::location::{Coord, Location};
use crate::path::Path;
use crate::tile::Shape;

// col, row, col, row, ...
fn flatten(locations: &[Location]) -> Int32Array {
    let flat = locations.iter()
        .flat_map(|location| [location.0 as i32, location.1 as i32])
        .collect_vec();
    Int32Array::from(flat.as_slice())
}

fn waypoints(path: Option<Path>) -> Option<Int32Array> {
    path.map(|path| flatten(path.waypoints()))
}

/// A game of [`Shape`] tiles.
#[wasm_bindgen]
pub struct Game {
    controller: SelectionController<Shape>,
}

#[wasm_bindgen]
impl Game {
    /// Deal a `size` x `size` board. Without a seed, one is drawn from `Math.random()`.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, seed: Option<u32>) -> Result<Game, JsError> {
        let seed = seed.map(u64::from)
            .unwrap_or_else(|| (Math::random() * f64::from(u32::MAX)) as u64);
        let config = GameConfig::default().with_size(size).with_seed(seed);

        Ok(Game { controller: SelectionController::start(BoardGenerator::new(config)?) })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.controller.board().size()
    }

    /// Row-major tiles: `0` for a cleared cell, otherwise one more than the tile's index in the palette.
    pub fn tiles(&self) -> Vec<u8> {
        self.controller.board().cells().iter()
            .map(|cell| match cell {
                Cell::Cleared => 0,
                Cell::Tile(shape) => Shape::VARIANTS.iter()
                    .position(|variant| variant == shape)
                    .map_or(0, |index| index as u8 + 1),
            })
            .collect_vec()
    }

    /// Click a cell. Returns the matched path's waypoints if the click completed a match.
    pub fn select(&mut self, col: i32, row: i32) -> Option<Int32Array> {
        waypoints(self.controller.select_cell(Location(col as Coord, row as Coord)).path)
    }

    /// The currently selected cell as `[col, row]`, if any.
    pub fn selection(&self) -> Option<Int32Array> {
        self.controller.selection().map(|location| flatten(&[location]))
    }

    /// Waypoints of the path from the selection to the hovered cell, if they could be matched.
    pub fn preview(&self, col: i32, row: i32) -> Option<Int32Array> {
        waypoints(self.controller.preview_path(Location(col as Coord, row as Coord)))
    }

    /// Waypoints of some pair that could be matched right now.
    pub fn hint(&self) -> Option<Int32Array> {
        waypoints(self.controller.hint().map(|(_, path)| path))
    }

    /// Tiles not yet cleared.
    pub fn remaining(&self) -> usize {
        self.controller.board().remaining_count()
    }

    /// Whether every tile has been cleared.
    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.controller.outcome() == GameOutcome::Won
    }

    /// Whether tiles remain but none can be matched.
    #[wasm_bindgen(js_name = isStuck)]
    pub fn is_stuck(&self) -> bool {
        self.controller.is_stuck()
    }

    /// Deal a new board.
    pub fn reset(&mut self) {
        self.controller.reset();
    }
}
