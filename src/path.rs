//! Connection-path search between two tiles.
//!
//! Two tiles connect if a route with at most two right-angle turns runs between them through nothing but
//! cleared cells and the lanes just outside the board. Candidate routes are tried in the fixed order given by
//! [`Route::VARIANTS`] and the first one that is clear wins, so the path shown to a player is deterministic.

use derive_more::{Display, Error};
use itertools::Itertools;
use strum::VariantArray;
use tracing::{instrument, trace};

use crate::board::Board;
use crate::location::{Coord, Location};
use crate::tile::Tile;

/// Reasons [`find_path`] refuses to search; all of them indicate a bug in the caller.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum PrecompositionError {
    /// Both endpoints are the same location.
    #[display("cannot connect {location} to itself")]
    SameLocation {
        /// The repeated location.
        location: Location,
    },
    /// An endpoint is outside the board.
    #[display("{location} is not on the board")]
    OffBoard {
        /// The off-board endpoint.
        location: Location,
    },
    /// An endpoint no longer holds a tile.
    #[display("{location} has already been cleared")]
    Cleared {
        /// The cleared endpoint.
        location: Location,
    },
    /// The endpoints hold different tiles.
    #[display("{from} and {to} hold different tiles")]
    TileMismatch {
        /// The first endpoint.
        from: Location,
        /// The second endpoint.
        to: Location,
    },
}

/// The shapes a connecting path may take, in the order they are tried.
#[derive(Copy, Clone, Debug, strum::Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Route {
    /// Straight along the shared row.
    DirectRow,
    /// Straight along the shared column.
    DirectColumn,
    /// Along the first tile's row, then along the second tile's column.
    CornerRowFirst,
    /// Along the first tile's column, then along the second tile's row.
    CornerColumnFirst,
    /// Out through the lane left of the board.
    Left,
    /// Out through the lane right of the board.
    Right,
    /// Out through the lane above the board.
    Top,
    /// Out through the lane below the board.
    Bottom,
}

impl Route {
    /// Number of right-angle turns a path of this kind makes.
    pub fn turns(&self) -> usize {
        match self {
            Self::DirectRow | Self::DirectColumn => 0,
            Self::CornerRowFirst | Self::CornerColumnFirst => 1,
            Self::Left | Self::Right | Self::Top | Self::Bottom => 2,
        }
    }

    /// Whether this route leaves the board.
    pub fn is_perimeter(&self) -> bool {
        self.turns() == 2
    }

    /// The waypoints this route would take from `a` to `b` on a board of side `size`,
    /// or [`None`] if the route does not apply to this pair at all.
    fn waypoints(&self, a: Location, b: Location, size: Coord) -> Option<Vec<Location>> {
        match self {
            Self::DirectRow => (a.1 == b.1).then(|| vec![a, b]),
            Self::DirectColumn => (a.0 == b.0).then(|| vec![a, b]),
            Self::CornerRowFirst => Some(vec![a, Location(b.0, a.1), b]),
            Self::CornerColumnFirst => Some(vec![a, Location(a.0, b.1), b]),
            Self::Left => Some(vec![a, Location(-1, a.1), Location(-1, b.1), b]),
            Self::Right => Some(vec![a, Location(size, a.1), Location(size, b.1), b]),
            Self::Top => Some(vec![a, Location(a.0, -1), Location(b.0, -1), b]),
            Self::Bottom => Some(vec![a, Location(a.0, size), Location(b.0, size), b]),
        }
    }

    fn try_connect<T: Tile>(&self, board: &Board<T>, a: Location, b: Location) -> Option<Path> {
        let waypoints = self.waypoints(a, b, board.size() as Coord)?;

        // a corner is a cell the path occupies, not just a bend in it
        let corners_passable = waypoints[1..waypoints.len() - 1].iter()
            .all(|corner| board.is_passable(*corner));
        let segments_clear = corners_passable && waypoints.iter()
            .tuple_windows()
            .all(|(from, to)| segment_is_clear(board, *from, *to));

        trace!(route = %self, corners_passable, segments_clear, "checked route");
        segments_clear.then(|| Path { route: *self, waypoints })
    }
}

/// A connecting path: straight segments joined at right angles, possibly running through the off-board lanes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Path {
    route: Route,
    // start, up to two corners, end
    waypoints: Vec<Location>,
}

impl Path {
    /// Which kind of route this is.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Start, corners, and end, in order of travel.
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// Where the path begins.
    pub fn start(&self) -> Location {
        self.waypoints[0]
    }

    /// Where the path ends.
    pub fn end(&self) -> Location {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Number of right-angle turns.
    pub fn turns(&self) -> usize {
        self.waypoints.len() - 2
    }

    /// Every location the path covers, endpoints included, in order of travel.
    pub fn cells(&self) -> Vec<Location> {
        let mut out = vec![self.start()];
        for (from, to) in self.waypoints.iter().tuple_windows() {
            out.extend(from.interior_to(*to).into_iter().flatten());
            out.push(*to);
        }

        out
    }

    /// The same path travelled the other way.
    ///
    /// The route is reported from the new starting point, so a [`CornerRowFirst`](Route::CornerRowFirst)
    /// becomes a [`CornerColumnFirst`](Route::CornerColumnFirst) and vice versa.
    pub fn reversed(&self) -> Self {
        let route = match self.route {
            Route::CornerRowFirst => Route::CornerColumnFirst,
            Route::CornerColumnFirst => Route::CornerRowFirst,
            other => other,
        };

        Self {
            route,
            waypoints: self.waypoints.iter().rev().copied().collect_vec(),
        }
    }
}

fn segment_is_clear<T: Tile>(board: &Board<T>, from: Location, to: Location) -> bool {
    from.interior_to(to)
        .is_some_and(|interior| interior.into_iter().all(|location| board.is_passable(location)))
}

/// Find the first clear path between the tiles at `a` and `b`, trying routes in [`Route::VARIANTS`] order.
///
/// The search always runs from the smaller of the two locations, so `find_path(board, b, a)` yields
/// exactly the reverse of `find_path(board, a, b)`.
/// Returns `Ok(None)` when the tiles are valid but cannot be connected.
#[instrument(level = "debug", skip_all, fields(%a, %b))]
pub fn find_path<T: Tile>(board: &Board<T>, a: Location, b: Location) -> Result<Option<Path>, PrecompositionError> {
    if a == b {
        return Err(PrecompositionError::SameLocation { location: a });
    }

    for location in [a, b] {
        if !board.is_on_board(location) {
            return Err(PrecompositionError::OffBoard { location });
        }
        if board.is_cleared(location) {
            return Err(PrecompositionError::Cleared { location });
        }
    }

    if board.tile(a) != board.tile(b) {
        return Err(PrecompositionError::TileMismatch { from: a, to: b });
    }

    let (from, to) = if a < b { (a, b) } else { (b, a) };
    let found = Route::VARIANTS.iter()
        .find_map(|route| route.try_connect(board, from, to));

    Ok(found.map(|path| if from == a { path } else { path.reversed() }))
}
