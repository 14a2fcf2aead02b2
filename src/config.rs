use crate::Coordinate;

/// Estimate of the remaining cost from a cell to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line distance. Admissible for 4-directional moves but not tight.
    #[default]
    Euclidean,
    /// Exact distance on an obstacle-free 4-grid.
    Manhattan,
}

impl Heuristic {
    pub fn distance(&self, p1: &Coordinate, p2: &Coordinate) -> f64 {
        match self {
            Heuristic::Euclidean => p1.euclidean_distance(p2),
            Heuristic::Manhattan => p1.manhattan_distance(p2) as f64,
        }
    }
}

/// Which node to expand when several open nodes share the minimal fScore.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The first one in the open set's insertion order.
    #[default]
    InsertionOrder,
    /// The smallest node by its ordering (for [Coordinate]: lowest row, then lowest column).
    LowestNode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathfinderConfig {
    pub heuristic: Heuristic,
    /// Multiplies the heuristic. Values above 1.0 trade optimality for fewer expansions.
    pub heuristic_factor: f64,
    pub tie_break: TieBreak,
    /// Aborts the search after this many loop iterations.
    pub max_expansions: Option<usize>,
}

impl Default for PathfinderConfig {
    fn default() -> PathfinderConfig {
        PathfinderConfig {
            heuristic: Heuristic::default(),
            heuristic_factor: 1.0,
            tie_break: TieBreak::default(),
            max_expansions: None,
        }
    }
}

impl PathfinderConfig {
    pub fn estimate(&self, p1: &Coordinate, p2: &Coordinate) -> f64 {
        self.heuristic.distance(p1, p2) * self.heuristic_factor
    }
}
