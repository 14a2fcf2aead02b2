use crate::Coordinate;
use core::fmt;

/// Reasons a grid or a start/goal pair is rejected before any search takes place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// The grid has no rows or no columns.
    EmptyGrid,
    OutOfBounds {
        coord: Coordinate,
        height: usize,
        width: usize,
    },
    /// Start or goal lies on an obstacle.
    Blocked(Coordinate),
    /// A row of a grid under construction differs in length from the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownCell {
        row: usize,
        col: usize,
        symbol: char,
    },
    /// The number of cells of a grid does not fit in a `usize`.
    TooLarge { height: usize, width: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::EmptyGrid => write!(f, "grid has no cells"),
            InvalidInput::OutOfBounds {
                coord,
                height,
                width,
            } => write!(f, "{} lies outside the {}x{} grid", coord, height, width),
            InvalidInput::Blocked(coord) => write!(f, "{} is an obstacle", coord),
            InvalidInput::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells but the grid is {} cells wide",
                row, found, expected
            ),
            InvalidInput::UnknownCell { row, col, symbol } => {
                write!(f, "unknown cell symbol '{}' at {},{}", symbol, row, col)
            }
            InvalidInput::TooLarge { height, width } => {
                write!(f, "a {}x{} grid has too many cells", height, width)
            }
        }
    }
}

/// Failure outcomes of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The open frontier was exhausted without reaching the goal.
    NotFound,
    InvalidInput(InvalidInput),
    /// The configured expansion cap was reached before the search finished.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::NotFound => write!(f, "no path found"),
            SearchError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            SearchError::ExpansionLimit { limit } => {
                write!(f, "search aborted after {} expansions", limit)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidInput(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<InvalidInput> for SearchError {
    fn from(reason: InvalidInput) -> Self {
        SearchError::InvalidInput(reason)
    }
}
