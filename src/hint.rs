use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use tracing::instrument;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::location::Location;
use crate::path::{find_path, Path, Route};
use crate::tile::Tile;

/// Every pair of standing tiles that could be matched right now, as an undirected graph.
///
/// Nodes are locations of standing tiles that have at least one partner; each edge carries the route that
/// [`find_path`] would pick for that pair.
#[derive(Clone, Debug)]
pub struct MatchGraph {
    graph: UnGraphMap<Location, Route>,
}

impl MatchGraph {
    /// Build the graph of currently connectable pairs on `board`.
    #[instrument(level = "debug", skip_all, fields(remaining = board.remaining_count()))]
    pub fn of<T: Tile>(board: &Board<T>) -> Self {
        let mut graph = UnGraphMap::new();

        for ((a, tile_a), (b, tile_b)) in board.standing().collect_vec().into_iter().tuple_combinations() {
            if tile_a != tile_b {
                continue;
            }

            // both standing and distinct, so preconditions hold
            if let Ok(Some(path)) = find_path(board, a, b) {
                graph.add_edge(a, b, path.route());
            }
        }

        Self { graph }
    }

    /// Number of connectable pairs.
    pub fn pair_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every connectable pair with the route that would join it.
    pub fn pairs(&self) -> impl Iterator<Item = (UnorderedPair<Location>, Route)> + '_ {
        self.graph.all_edges()
            .map(|(a, b, route)| (UnorderedPair(a, b), *route))
    }

    /// Locations that the tile at `location` could be matched with right now.
    pub fn partners_of(&self, location: Location) -> Vec<Location> {
        if !self.graph.contains_node(location) {
            return Vec::new();
        }

        self.graph.neighbors(location).sorted().collect_vec()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &UnGraphMap<Location, Route> {
        &self.graph
    }
}

/// The first connectable pair in row-major order, with its path.
///
/// Stops at the first pair found rather than building a whole [`MatchGraph`].
#[instrument(level = "debug", skip_all)]
pub fn hint<T: Tile>(board: &Board<T>) -> Option<(UnorderedPair<Location>, Path)> {
    board.standing()
        .collect_vec()
        .into_iter()
        .tuple_combinations()
        .filter(|((_, tile_a), (_, tile_b))| tile_a == tile_b)
        .find_map(|((a, _), (b, _))| {
            find_path(board, a, b).ok().flatten().map(|path| (UnorderedPair(a, b), path))
        })
}

/// Whether any pair on `board` can be matched right now.
pub fn has_moves<T: Tile>(board: &Board<T>) -> bool {
    hint(board).is_some()
}
