use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Offsets probed from each oil tile during the row-major scan.
/// Earlier tiles already probed the backward/upward directions.
pub const FORWARD_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Column (`x`) and row (`y`) of a tile in the survey grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shifted coordinate, or `None` if either component would go negative.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    pub fn forward_neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        FORWARD_OFFSETS
            .iter()
            .filter_map(move |(dx, dy)| self.offset(*dx, *dy))
    }

    /// 8-adjacency, used to verify clustering results.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

// row-major: by row, then column
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_edge_has_no_down_left_neighbor() {
        let c = Coordinate::new(0, 3);
        let neighbors: Vec<_> = c.forward_neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(1, 3),
                Coordinate::new(0, 4),
                Coordinate::new(1, 4)
            ]
        );
    }

    #[test]
    fn interior_tile_has_four_forward_neighbors() {
        let c = Coordinate::new(2, 2);
        assert_eq!(c.forward_neighbors().count(), 4);
        assert!(c.forward_neighbors().all(|n| n > c));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cs = vec![(3, 0), (0, 1), (1, 0)]
            .into_iter()
            .map(Coordinate::from)
            .collect::<Vec<_>>();
        cs.sort();
        assert_eq!(
            cs,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(3, 0),
                Coordinate::new(0, 1)
            ]
        );
    }

    #[test]
    fn adjacency_includes_diagonals() {
        let c = Coordinate::new(1, 1);
        assert!(c.is_adjacent(&Coordinate::new(0, 0)));
        assert!(c.is_adjacent(&Coordinate::new(2, 1)));
        assert!(!c.is_adjacent(&c));
        assert!(!c.is_adjacent(&Coordinate::new(3, 1)));
    }
}
