use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Inclusive tile extent of a deposit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn new(min: Coordinate, max: Coordinate) -> BoundingBox {
        BoundingBox { min, max }
    }

    pub fn width(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> usize {
        self.max.y - self.min.y + 1
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.min.x..=self.max.x).contains(&c.x) && (self.min.y..=self.max.y).contains(&c.y)
    }

    pub fn extend(&mut self, c: &Coordinate) {
        self.min.x = self.min.x.min(c.x);
        self.min.y = self.min.y.min(c.y);
        self.max.x = self.max.x.max(c.x);
        self.max.y = self.max.y.max(c.y);
    }

    /// `None` when the iterator is empty.
    pub fn try_from_iter<'a, I: IntoIterator<Item = &'a Coordinate>>(iter: I) -> Option<Self> {
        let mut iter = iter.into_iter();
        let first = *iter.next()?;
        let mut b = Self::new(first, first);
        for c in iter {
            b.extend(c);
        }
        Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_scattered_tiles() {
        let tiles = [
            Coordinate::new(3, 1),
            Coordinate::new(1, 4),
            Coordinate::new(2, 2),
        ];
        let b = BoundingBox::try_from_iter(&tiles).unwrap();
        assert_eq!(b.min, Coordinate::new(1, 1));
        assert_eq!(b.max, Coordinate::new(3, 4));
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 4);
        assert!(b.contains(&Coordinate::new(2, 3)));
        assert!(!b.contains(&Coordinate::new(0, 3)));
    }

    #[test]
    fn no_tiles_no_bounds() {
        let tiles: &[Coordinate] = &[];
        assert!(BoundingBox::try_from_iter(tiles).is_none());
    }
}
