use crate::{clusterer::Clusterer, coordinate::Coordinate, deposit::Deposit, grid::Grid};

/// Reference clusterer that finds a tile's deposit by scanning the open
/// list. Deposits are re-inserted at the front after every step, so the
/// list doubles as a most-recently-used cache for those scans.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruClusterer;

impl Clusterer for LruClusterer {
    fn cluster(&self, grid: &Grid) -> Vec<Deposit> {
        let mut deposits: Vec<Deposit> = vec![];

        for tile in grid.oil_tiles() {
            let mut deposit =
                detach(&mut deposits, &tile).unwrap_or_else(|| Deposit::singleton(tile));

            for neighbor in tile.forward_neighbors() {
                if !grid.is_oil(neighbor) {
                    continue;
                }
                match detach(&mut deposits, &neighbor) {
                    Some(connected) => deposit.merge(connected),
                    None => {
                        deposit.insert(neighbor);
                    }
                }
            }

            deposits.insert(0, deposit);
        }

        tracing::debug!(deposits = deposits.len(), "clustering finished");
        deposits
    }
}

/// Removes and returns the open deposit holding `tile`, if any.
fn detach(deposits: &mut Vec<Deposit>, tile: &Coordinate) -> Option<Deposit> {
    let position = deposits.iter().position(|d| d.contains(tile))?;
    Some(deposits.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;

    fn count(rows: &[&str]) -> usize {
        LruClusterer.cluster(&Grid::from_lines(rows)).len()
    }

    #[test]
    fn scenarios() {
        assert_eq!(count(&["X.XXX", "...XX", ".X.XX", "....X", "XX..."]), 4);
        assert_eq!(count(&["XX", "XX"]), 1);
        assert_eq!(count(&["X.X", ".X.", "X.X"]), 1);
        assert_eq!(count(&[""]), 0);
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn islands_stay_apart() {
        let deposits = LruClusterer.cluster(&generator::islands(64));
        assert_eq!(deposits.len(), 64);
    }

    #[test]
    fn late_merge_moves_deposit_to_front() {
        // the two arms open separately and join on the last row
        let deposits = LruClusterer.cluster(&Grid::from_lines(["X.X.X", "X.X..", ".X..."]));
        assert_eq!(deposits.len(), 2);
        assert_eq!(deposits[0].len(), 5);
        assert_eq!(deposits[1], Deposit::singleton(Coordinate::new(4, 0)));
    }
}
