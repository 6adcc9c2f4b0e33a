//! The selection state machine that turns clicks into matches.

use tracing::{debug, instrument, trace, warn};
use unordered_pair::UnorderedPair;

use crate::board::{Board, BoardError};
use crate::generator::BoardGenerator;
use crate::hint::{self, MatchGraph};
use crate::location::Location;
use crate::path::{find_path, Path};
use crate::tile::Tile;

/// Where a [`SelectionController`] is in its select/match cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// Nothing selected.
    Idle,
    /// One standing tile is selected, waiting for its partner.
    OneSelected(Location),
    /// Every tile has been cleared. Only [`SelectionController::reset`] leaves this state.
    Won,
}

/// Whether the game on a board is over.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameOutcome {
    /// Tiles remain.
    InProgress,
    /// Every tile has been cleared.
    Won,
}

impl GameOutcome {
    fn of<T: Tile>(board: &Board<T>) -> Self {
        match board.remaining_count() {
            0 => Self::Won,
            _ => Self::InProgress,
        }
    }
}

/// What a presentation layer needs to redraw after a click.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOutcome {
    /// The selected location after the click, if any.
    pub selection: Option<Location>,
    /// The pair cleared by this click, if it completed a match.
    pub matched: Option<UnorderedPair<Location>>,
    /// The path joining the matched pair.
    pub path: Option<Path>,
    /// Whether the game is over.
    pub outcome: GameOutcome,
}

/// Drives one game session: owns its [`Board`] exclusively and is the only thing that ever clears tiles on it.
///
/// Clicks that cannot do anything (off-board, on a cleared cell, on a mismatched or unreachable tile) are
/// never errors; they either leave the state alone or move the selection.
#[derive(Clone, Debug)]
pub struct SelectionController<T: Tile> {
    board: Board<T>,
    state: State,
    generator: BoardGenerator<T>,
}

impl<T: Tile> SelectionController<T> {
    /// Take charge of `board`. `generator` deals the board used by [`Self::reset`].
    pub fn new(board: Board<T>, generator: BoardGenerator<T>) -> Self {
        let state = match GameOutcome::of(&board) {
            GameOutcome::Won => State::Won,
            GameOutcome::InProgress => State::Idle,
        };

        Self { board, state, generator }
    }

    /// Start a session on a freshly dealt board.
    pub fn start(mut generator: BoardGenerator<T>) -> Self {
        let board = generator.generate();
        Self::new(board, generator)
    }

    /// The board being played.
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// The current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The selected location, if any.
    pub fn selection(&self) -> Option<Location> {
        match self.state {
            State::OneSelected(location) => Some(location),
            State::Idle | State::Won => None,
        }
    }

    /// Whether the game is over.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(&self.board)
    }

    fn snapshot(&self) -> SelectOutcome {
        SelectOutcome {
            selection: self.selection(),
            matched: None,
            path: None,
            outcome: self.outcome(),
        }
    }

    /// Handle a click on `location`.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn select_cell(&mut self, location: Location) -> SelectOutcome {
        if self.state == State::Won {
            trace!("game already won");
            return self.snapshot();
        }

        let Some(tile) = self.board.tile(location) else {
            trace!("off-board or cleared, ignoring");
            return self.snapshot();
        };

        let previous = match self.state {
            State::OneSelected(previous) => previous,
            _ => {
                self.state = State::OneSelected(location);
                debug!("selected");
                return self.snapshot();
            }
        };

        if previous == location {
            self.state = State::Idle;
            debug!("deselected");
            return self.snapshot();
        }

        if self.board.tile(previous) != Some(tile) {
            self.state = State::OneSelected(location);
            debug!(%previous, "tiles differ, reselected");
            return self.snapshot();
        }

        let path = match find_path(&self.board, previous, location) {
            Ok(Some(path)) => path,
            Ok(None) => {
                self.state = State::OneSelected(location);
                debug!(%previous, "no path, reselected");
                return self.snapshot();
            }
            Err(error) => {
                warn!(%error, "path search refused a checked pair, reselecting");
                self.state = State::OneSelected(location);
                return self.snapshot();
            }
        };

        if let Err(error) = self.commit(previous, location) {
            warn!(%error, "could not clear matched pair");
            self.state = State::Idle;
            return self.snapshot();
        }

        self.state = match self.outcome() {
            GameOutcome::Won => State::Won,
            GameOutcome::InProgress => State::Idle,
        };
        debug!(%previous, route = %path.route(), remaining = self.board.remaining_count(), "matched");

        SelectOutcome {
            selection: None,
            matched: Some(UnorderedPair(previous, location)),
            path: Some(path),
            outcome: self.outcome(),
        }
    }

    fn commit(&mut self, a: Location, b: Location) -> Result<(), BoardError> {
        self.board.clear(a)?;
        self.board.clear(b)?;
        Ok(())
    }

    /// The path that would join the current selection to `hover`, for drawing a hint line.
    ///
    /// [`None`] unless a tile is selected and `hover` is a different standing tile it could be matched with.
    pub fn preview_path(&self, hover: Location) -> Option<Path> {
        let State::OneSelected(selected) = self.state else {
            return None;
        };

        if selected == hover || self.board.tile(hover).is_none() || self.board.tile(hover) != self.board.tile(selected) {
            return None;
        }

        find_path(&self.board, selected, hover).ok().flatten()
    }

    /// Some pair that could be matched right now, with its path.
    pub fn hint(&self) -> Option<(UnorderedPair<Location>, Path)> {
        hint::hint(&self.board)
    }

    /// Every pair that could be matched right now.
    pub fn match_graph(&self) -> MatchGraph {
        MatchGraph::of(&self.board)
    }

    /// Whether tiles remain but none of them can be matched.
    pub fn is_stuck(&self) -> bool {
        self.outcome() == GameOutcome::InProgress && !hint::has_moves(&self.board)
    }

    /// Deal a new board and return to [`State::Idle`].
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = self.generator.generate();
        self.state = State::Idle;
        debug!("reset");
    }
}
