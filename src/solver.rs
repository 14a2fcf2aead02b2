use crate::astar::{AstarSearch, SearchStep};
use crate::config::PathfinderConfig;
use crate::observer::{NoopObserver, StepObserver};
use crate::pathing_grid::{Cell, PathingGrid};
use crate::{Coordinate, FrontierSet, InvalidInput, SearchError};
use log::{debug, info, warn};

/// Finds shortest 4-directional paths on a [PathingGrid]. Holds only configuration; every search
/// owns its frontiers and score tables, so one [Pathfinder] can serve any number of grids.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    pub config: PathfinderConfig,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder::default()
    }

    pub fn with_config(config: PathfinderConfig) -> Pathfinder {
        Pathfinder { config }
    }

    /// Rejects empty grids, and start or goal cells that are outside the grid or obstacles.
    pub fn validate(
        grid: &PathingGrid,
        start: &Coordinate,
        goal: &Coordinate,
    ) -> Result<(), InvalidInput> {
        if grid.is_empty() {
            return Err(InvalidInput::EmptyGrid);
        }
        for coord in [start, goal] {
            match grid.get(coord) {
                None => {
                    return Err(InvalidInput::OutOfBounds {
                        coord: *coord,
                        height: grid.height(),
                        width: grid.width(),
                    })
                }
                Some(Cell::Obstacle) => return Err(InvalidInput::Blocked(*coord)),
                Some(Cell::Passable) => {}
            }
        }
        Ok(())
    }

    /// Sets up a search from `start` to `goal` without running it. See [GridSearch::step].
    pub fn search<'g>(
        &self,
        grid: &'g PathingGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<GridSearch<'g>, SearchError> {
        if let Err(reason) = Self::validate(grid, &start, &goal) {
            debug!("Rejecting search from {} to {}: {}", start, goal, reason);
            return Err(reason.into());
        }
        let estimate = self.config.estimate(&start, &goal);
        Ok(GridSearch {
            grid,
            goal,
            config: self.config.clone(),
            inner: AstarSearch::new(start, estimate, self.config.tie_break),
        })
    }

    /// Computes a shortest path from `start` to `goal`, both included. Returns
    /// [SearchError::NotFound] if the goal cannot be reached.
    pub fn find_path(
        &self,
        grid: &PathingGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Vec<Coordinate>, SearchError> {
        self.find_path_observed(grid, start, goal, &mut NoopObserver)
    }

    /// Like [find_path](Self::find_path), showing the frontiers to `observer` at the start of every
    /// iteration.
    pub fn find_path_observed<O>(
        &self,
        grid: &PathingGrid,
        start: Coordinate,
        goal: Coordinate,
        observer: &mut O,
    ) -> Result<Vec<Coordinate>, SearchError>
    where
        O: StepObserver + ?Sized,
    {
        self.search(grid, start, goal)?.run(observer)
    }
}

/// An A* search on a grid that is advanced one expansion at a time. The grid is borrowed for the
/// lifetime of the search and cannot change underneath it.
#[derive(Clone, Debug)]
pub struct GridSearch<'g> {
    grid: &'g PathingGrid,
    goal: Coordinate,
    config: PathfinderConfig,
    inner: AstarSearch<Coordinate, f64>,
}

impl<'g> GridSearch<'g> {
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    pub fn open(&self) -> &FrontierSet<Coordinate> {
        self.inner.open()
    }

    pub fn closed(&self) -> &FrontierSet<Coordinate> {
        self.inner.closed()
    }

    pub fn iterations(&self) -> usize {
        self.inner.iterations()
    }

    /// Runs one iteration of the search loop. Once the goal has been found, further calls keep
    /// returning the same path.
    pub fn step(&mut self) -> SearchStep<Coordinate> {
        let grid = self.grid;
        let goal = self.goal;
        let config = &self.config;
        self.inner.step(
            |node| {
                grid.neighborhood_points(node)
                    .into_iter()
                    .map(|p| (p, 1.0))
            },
            |node| config.estimate(node, &goal),
            |node| *node == goal,
        )
    }

    /// Steps until the goal is found or the open set runs dry, notifying `observer` before each
    /// iteration.
    pub fn run<O>(&mut self, observer: &mut O) -> Result<Vec<Coordinate>, SearchError>
    where
        O: StepObserver + ?Sized,
    {
        loop {
            if self.open().is_empty() {
                info!(
                    "{} is not reachable, {} nodes evaluated",
                    self.goal,
                    self.closed().len()
                );
                return Err(SearchError::NotFound);
            }
            if let Some(limit) = self.config.max_expansions {
                if self.iterations() >= limit {
                    warn!("Search for {} hit the limit of {} expansions", self.goal, limit);
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }
            observer.on_step(self.inner.open(), self.inner.closed());
            match self.step() {
                SearchStep::Expanded(_) => {}
                SearchStep::Found(path) => {
                    info!(
                        "Found path of {} nodes to {} after {} iterations",
                        path.len(),
                        self.goal,
                        self.iterations()
                    );
                    return Ok(path);
                }
                SearchStep::Exhausted => return Err(SearchError::NotFound),
            }
        }
    }
}

/// Computes a path with the default [PathfinderConfig].
pub fn find_path(
    grid: &PathingGrid,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Vec<Coordinate>, SearchError> {
    Pathfinder::new().find_path(grid, start, goal)
}
