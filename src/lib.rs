//! # grid_astar
//!
//! Shortest paths on a rectangular grid of passable and blocked cells, moving in the four cardinal
//! directions. Implements [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a
//! straight-line heuristic over an insertion-ordered open set, so that a search is reproducible
//! and its open and closed frontiers can be observed (e.g. to animate it) after every iteration.
//! A search can also be driven one expansion at a time through [GridSearch].
//!
//! ```
//! use grid_astar::{find_path, Coordinate, PathingGrid};
//!
//! let grid: PathingGrid = "
//!     ...
//!     .#.
//!     ...
//! "
//! .parse()
//! .unwrap();
//! let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! The [PathingGrid] additionally keeps track of
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)), which tells
//! whether a path exists without searching for it.
pub mod astar;
pub mod config;
mod coordinate;
mod error;
mod frontier;
pub mod observer;
pub mod pathing_grid;
pub mod solver;

use itertools::Itertools;

pub use crate::astar::SearchStep;
pub use crate::config::{Heuristic, PathfinderConfig, TieBreak};
pub use crate::coordinate::{Coordinate, ParseCoordinateError};
pub use crate::error::{InvalidInput, SearchError};
pub use crate::frontier::FrontierSet;
pub use crate::observer::{FrontierRecorder, FrontierSnapshot, NoopObserver, StepObserver};
pub use crate::pathing_grid::{Cell, PathingGrid};
pub use crate::solver::{find_path, GridSearch, Pathfinder};

/// The nodes of a path strictly between its start and goal, which a renderer marks as waypoints.
pub fn waypoints(path: &[Coordinate]) -> &[Coordinate] {
    if path.len() <= 2 {
        &[]
    } else {
        &path[1..path.len() - 1]
    }
}

/// Number of unit moves along the path.
pub fn path_cost(path: &[Coordinate]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that a path is non-empty, only visits passable cells of `grid`, never repeats a cell,
/// and only ever moves to a 4-neighbour.
pub fn is_valid_path(grid: &PathingGrid, path: &[Coordinate]) -> bool {
    !path.is_empty()
        && path.iter().all(|p| grid.can_move_to(p))
        && path.iter().all_unique()
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
