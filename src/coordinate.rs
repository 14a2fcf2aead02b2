use core::fmt;
use core::str::FromStr;
use smallvec::SmallVec;

/// Identifies a grid cell by its `row` and `col`. Ordering is lexicographic, row first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// The 4-neighborhood in the order up, left, right, down. Neighbours that would have a negative
    /// row or column are left out; bounds on the other side are up to the grid.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        let mut neighbours = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighbours.push(Coordinate::new(row, self.col));
        }
        if let Some(col) = self.col.checked_sub(1) {
            neighbours.push(Coordinate::new(self.row, col));
        }
        neighbours.push(Coordinate::new(self.row, self.col + 1));
        neighbours.push(Coordinate::new(self.row + 1, self.col));
        neighbours
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Straight-line distance between the two cells, treating row and column as continuous axes.
    pub fn euclidean_distance(&self, other: &Coordinate) -> f64 {
        let d_row = self.row.abs_diff(other.row) as f64;
        let d_col = self.col.abs_diff(other.col) as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// True if the two coordinates differ by exactly one in exactly one axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Coordinate {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error returned when parsing a `row,col` key fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCoordinateError(String);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid coordinate key '{}', expected 'row,col'", self.0)
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Coordinate::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order_is_up_left_right_down() {
        let c = Coordinate::new(1, 1);
        let n = c.neumann_neighborhood();
        assert_eq!(
            n.as_slice(),
            &[
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1)
            ]
        );
    }

    /// The origin has no cells above or to the left of it.
    #[test]
    fn neighborhood_at_origin() {
        let n = Coordinate::new(0, 0).neumann_neighborhood();
        assert_eq!(n.as_slice(), &[Coordinate::new(0, 1), Coordinate::new(1, 0)]);
    }

    #[test]
    fn distances() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
        assert!(a.euclidean_distance(&b) <= a.manhattan_distance(&b) as f64);
    }

    #[test]
    fn string_key_round_trip() {
        let c = Coordinate::new(12, 7);
        assert_eq!(c.to_string(), "12,7");
        assert_eq!("12,7".parse::<Coordinate>(), Ok(c));
        assert!("12".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coordinate::new(0, 5) < Coordinate::new(1, 0));
        assert!(Coordinate::new(2, 1) < Coordinate::new(2, 3));
    }
}
