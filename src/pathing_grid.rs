use crate::{Coordinate, InvalidInput};
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, Grid};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Traversability of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Passable,
    Obstacle,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        self == Cell::Passable
    }

    fn from_blocked(blocked: bool) -> Cell {
        if blocked {
            Cell::Obstacle
        } else {
            Cell::Passable
        }
    }
}

/// [PathingGrid] keeps the obstacle flags in a [BoolGrid] (`true` for an obstacle), with a
/// [Coordinate]'s row as `y` and its column as `x`. In addition to the raw cells it maintains
/// information about 4-connected components using a [UnionFind] structure, so callers can check
/// whether a goal is reachable without running a search.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

/// Number of cells in a `height` x `width` grid, if it fits in a `usize`.
fn cell_count(height: usize, width: usize) -> Result<usize, InvalidInput> {
    height
        .checked_mul(width)
        .ok_or(InvalidInput::TooLarge { height, width })
}

impl PathingGrid {
    /// Creates a `height` x `width` grid in which every cell is an obstacle if `blocked` is true
    /// and passable otherwise. `height * width` must fit in a `usize`; see
    /// [try_new](Self::try_new) for a checked version.
    pub fn new(height: usize, width: usize, blocked: bool) -> PathingGrid {
        let mut grid = PathingGrid {
            grid: BoolGrid::new(width, height, blocked),
            components: UnionFind::new(height * width),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Like [new](Self::new), rejecting dimensions whose cell count overflows.
    pub fn try_new(height: usize, width: usize, blocked: bool) -> Result<PathingGrid, InvalidInput> {
        cell_count(height, width)?;
        Ok(PathingGrid::new(height, width, blocked))
    }

    /// Builds a grid from explicit rows. Every row must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<PathingGrid, InvalidInput> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        cell_count(height, width)?;
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(InvalidInput::RaggedRows {
                row,
                expected: width,
                found: values.len(),
            });
        }
        let mut bool_grid = BoolGrid::new(width, height, false);
        for (y, values) in rows.iter().enumerate() {
            for (x, cell) in values.iter().enumerate() {
                bool_grid.set(x, y, !cell.is_passable());
            }
        }
        let mut grid = PathingGrid {
            grid: bool_grid,
            components: UnionFind::new(height * width),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn in_bounds(&self, coord: &Coordinate) -> bool {
        self.grid.index_in_bounds(coord.col, coord.row)
    }

    fn get_ix(&self, coord: &Coordinate) -> usize {
        self.grid.get_ix(coord.col, coord.row)
    }

    /// The cell at `coord`, or [None] if it lies outside the grid.
    pub fn get(&self, coord: &Coordinate) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(Cell::from_blocked(self.grid.get(coord.col, coord.row)))
        } else {
            None
        }
    }

    /// Checks whether `coord` is inside the grid and not an obstacle.
    pub fn can_move_to(&self, coord: &Coordinate) -> bool {
        self.in_bounds(coord) && !self.grid.get(coord.col, coord.row)
    }

    /// The passable 4-neighbours of `coord`, in the order up, left, right, down.
    pub fn neighborhood_points(&self, coord: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        coord
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(p))
            .collect()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// components are (potentially) broken apart into multiple.
    pub fn set(&mut self, coord: Coordinate, blocked: bool) -> Result<(), InvalidInput> {
        if !self.in_bounds(&coord) {
            return Err(InvalidInput::OutOfBounds {
                coord,
                height: self.height(),
                width: self.width(),
            });
        }
        let ix = self.get_ix(&coord);
        if blocked {
            if self.can_move_to(&coord) {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighborhood_points(&coord) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.grid.set(coord.col, coord.row, blocked);
        Ok(())
    }

    /// Sets every cell in the rectangle of `height` x `width` cells with top-left corner `corner`,
    /// clipped to the grid.
    pub fn set_rect(&mut self, corner: Coordinate, height: usize, width: usize, blocked: bool) {
        let rows = corner.row..corner.row.saturating_add(height).min(self.height());
        let cols = corner.col..corner.col.saturating_add(width).min(self.width());
        for row in rows {
            for col in cols.clone() {
                // Clipped to the grid above, so this cannot fail.
                let _ = self.set(Coordinate::new(row, col), blocked);
            }
        }
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, coord: &Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(self.components.find(self.get_ix(coord)))
        } else {
            None
        }
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Obstacles and cells outside the
    /// grid are unreachable from anywhere.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            let start_ix = self.get_ix(start);
            let goal_ix = self.get_ix(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for row in 0..h {
            for col in 0..w {
                let coord = Coordinate::new(row, col);
                if !self.can_move_to(&coord) {
                    continue;
                }
                let parent_ix = self.get_ix(&coord);
                for n in [Coordinate::new(row, col + 1), Coordinate::new(row + 1, col)] {
                    if self.can_move_to(&n) {
                        let ix = self.get_ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let line: String = (0..self.width())
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses a grid drawn with `.` for passable cells and `#` for obstacles, one row per line.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for PathingGrid {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| match symbol {
                        '.' => Ok(Cell::Passable),
                        '#' => Ok(Cell::Obstacle),
                        _ => Err(InvalidInput::UnknownCell { row, col, symbol }),
                    })
                    .collect::<Result<Vec<Cell>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        PathingGrid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // .#.
        // .#.
        let grid: PathingGrid = ".#.\n.#.".parse().unwrap();
        assert!(grid.reachable(&c(0, 0), &c(1, 0)));
        assert!(grid.unreachable(&c(0, 0), &c(0, 2)));
        assert!(grid.unreachable(&c(0, 0), &c(0, 1)));
        assert_ne!(grid.get_component(&c(0, 0)), grid.get_component(&c(0, 2)));
        assert_eq!(grid.get_component(&c(0, 3)), None);
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_connected() {
        // .#
        // #.
        let grid: PathingGrid = ".#\n#.".parse().unwrap();
        assert!(grid.unreachable(&c(0, 0), &c(1, 1)));
    }

    #[test]
    fn set_joins_and_dirties_components() {
        let mut grid = PathingGrid::new(1, 3, false);
        grid.set(c(0, 1), true).unwrap();
        assert!(grid.components_dirty());
        // Stale until regenerated
        assert!(grid.reachable(&c(0, 0), &c(0, 2)));
        grid.update();
        assert!(!grid.components_dirty());
        assert!(grid.unreachable(&c(0, 0), &c(0, 2)));
        grid.set(c(0, 1), false).unwrap();
        assert!(!grid.components_dirty());
        assert!(grid.reachable(&c(0, 0), &c(0, 2)));
    }

    /// Re-blocking an obstacle must not link it to its neighbours.
    #[test]
    fn setting_obstacle_twice_keeps_it_isolated() {
        let mut grid = PathingGrid::new(2, 2, false);
        grid.set(c(0, 0), true).unwrap();
        grid.update();
        grid.set(c(0, 0), true).unwrap();
        assert!(!grid.components_dirty());
        assert_ne!(grid.get_component(&c(0, 0)), grid.get_component(&c(1, 1)));
    }

    #[test]
    fn set_out_of_bounds() {
        let mut grid = PathingGrid::new(2, 2, false);
        assert_eq!(
            grid.set(c(2, 0), true),
            Err(InvalidInput::OutOfBounds {
                coord: c(2, 0),
                height: 2,
                width: 2
            })
        );
    }

    #[test]
    fn set_rect_is_clipped() {
        let mut grid = PathingGrid::new(3, 3, false);
        grid.set_rect(c(1, 1), 5, 5, true);
        assert_eq!(grid.to_string(), "...\n.##\n.##\n");
    }

    /// An extent reaching past `usize::MAX` is clipped like any other.
    #[test]
    fn set_rect_with_unbounded_extent() {
        let mut grid = PathingGrid::new(3, 3, false);
        grid.set_rect(c(1, 1), usize::MAX, usize::MAX, true);
        assert_eq!(grid.to_string(), "...\n.##\n.##\n");
        grid.set_rect(c(0, 2), usize::MAX, 1, false);
        assert_eq!(grid.to_string(), "...\n.#.\n.#.\n");
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            PathingGrid::try_new(usize::MAX, 2, false).unwrap_err(),
            InvalidInput::TooLarge {
                height: usize::MAX,
                width: 2
            }
        );
        let grid = PathingGrid::try_new(2, 3, true).unwrap();
        assert_eq!(grid.to_string(), "###\n###\n");
        assert!(!grid.is_empty());
        assert!(PathingGrid::try_new(0, 3, false).unwrap().is_empty());
    }

    /// Rows run along the grid's height and columns along its width.
    #[test]
    fn rows_and_columns_on_a_wide_grid() {
        let mut grid = PathingGrid::new(2, 4, false);
        assert_eq!((grid.height(), grid.width()), (2, 4));
        grid.set(c(1, 3), true).unwrap();
        assert_eq!(grid.get(&c(1, 3)), Some(Cell::Obstacle));
        assert_eq!(grid.get(&c(0, 3)), Some(Cell::Passable));
        assert_eq!(grid.get(&c(3, 1)), None);
        assert!(grid.set(c(3, 1), true).is_err());
        assert_eq!(grid.to_string(), "....\n...#\n");
    }

    #[test]
    fn neighbours_skip_obstacles_and_edges() {
        let grid: PathingGrid = "
            .#.
            ...
        "
        .parse()
        .unwrap();
        assert_eq!(grid.neighborhood_points(&c(0, 0)).as_slice(), &[c(1, 0)]);
        assert_eq!(
            grid.neighborhood_points(&c(1, 1)).as_slice(),
            &[c(1, 0), c(1, 2)]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "..\n...".parse::<PathingGrid>().unwrap_err(),
            InvalidInput::RaggedRows {
                row: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            ".x".parse::<PathingGrid>().unwrap_err(),
            InvalidInput::UnknownCell {
                row: 0,
                col: 1,
                symbol: 'x'
            }
        );
    }

    #[test]
    fn display_round_trip() {
        let layout = "#..\n.#.\n";
        let grid: PathingGrid = layout.parse().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.to_string(), layout);
        assert_eq!(grid.get(&c(0, 0)), Some(Cell::Obstacle));
        assert_eq!(grid.get(&c(2, 0)), None);
    }
}
