use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{bounding_box::BoundingBox, coordinate::Coordinate};

/// One maximal 8-connected group of oil tiles.
///
/// Tiles are kept in row-major order so iteration and serialization are
/// stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    tiles: BTreeSet<Coordinate>,
}

impl Deposit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(tile: Coordinate) -> Self {
        Self {
            tiles: BTreeSet::from([tile]),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: &Coordinate) -> bool {
        self.tiles.contains(tile)
    }

    /// Returns `false` if the tile was already present.
    pub fn insert(&mut self, tile: Coordinate) -> bool {
        self.tiles.insert(tile)
    }

    /// Moves every tile of `other` into `self`.
    pub fn merge(&mut self, mut other: Deposit) {
        if other.tiles.len() > self.tiles.len() {
            std::mem::swap(&mut self.tiles, &mut other.tiles);
        }
        self.tiles.append(&mut other.tiles);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.tiles.iter()
    }

    /// Topmost-leftmost tile, i.e. the first one a row-major scan reaches.
    pub fn first(&self) -> Option<&Coordinate> {
        self.tiles.first()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::try_from_iter(&self.tiles)
    }
}

impl FromIterator<Coordinate> for Deposit {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deposit {
    type Item = &'a Coordinate;
    type IntoIter = std::collections::btree_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(tiles: &[(usize, usize)]) -> Deposit {
        tiles.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn merge_takes_union() {
        let mut a = deposit(&[(0, 0), (1, 0)]);
        let b = deposit(&[(1, 0), (2, 1), (3, 2)]);
        a.merge(b);
        assert_eq!(a, deposit(&[(0, 0), (1, 0), (2, 1), (3, 2)]));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut d = Deposit::singleton(Coordinate::new(4, 4));
        assert!(!d.insert(Coordinate::new(4, 4)));
        assert!(d.insert(Coordinate::new(5, 4)));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn first_tile_is_top_left_in_scan_order() {
        let d = deposit(&[(3, 1), (4, 0), (0, 2)]);
        assert_eq!(d.first(), Some(&Coordinate::new(4, 0)));
        let b = d.bounds().unwrap();
        assert_eq!(b.min, Coordinate::new(0, 0));
        assert_eq!(b.max, Coordinate::new(4, 2));
    }

    #[test]
    fn empty_deposit_has_no_bounds() {
        assert!(Deposit::new().bounds().is_none());
        assert!(Deposit::new().is_empty());
    }
}
