use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, deposit::Deposit, grid::Grid, lru_clusterer::LruClusterer};

/// Partitions the oil tiles of a grid into deposits.
///
/// Output is ordered most-recently-touched first: a deposit moves to the
/// front each time a scan step extends or merges it.
pub trait Clusterer {
    fn cluster(&self, grid: &Grid) -> Vec<Deposit>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hash index from tile to deposit, union by size.
    #[default]
    Indexed,
    /// Linear membership scans over a front-inserted list.
    Lru,
}

impl Strategy {
    pub fn cluster(&self, grid: &Grid) -> Vec<Deposit> {
        match self {
            Strategy::Indexed => IndexedClusterer.cluster(grid),
            Strategy::Lru => LruClusterer.cluster(grid),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Indexed => "indexed",
            Strategy::Lru => "lru",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "indexed" => Ok(Strategy::Indexed),
            "lru" => Ok(Strategy::Lru),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IndexedClusterer;

impl Clusterer for IndexedClusterer {
    fn cluster(&self, grid: &Grid) -> Vec<Deposit> {
        let mut state = ClusterState::default();
        for tile in grid.oil_tiles() {
            state.visit(grid, tile);
        }
        state.finish()
    }
}

type DepositId = usize;

#[derive(Debug)]
struct OpenDeposit {
    deposit: Deposit,
    /// scan step at which this deposit was last the active one
    touched: usize,
}

/// Working set of a single clustering pass.
#[derive(Debug, Default)]
struct ClusterState {
    slots: Vec<Option<OpenDeposit>>,
    index: HashMap<Coordinate, DepositId>,
    step: usize,
}

impl ClusterState {
    fn visit(&mut self, grid: &Grid, tile: Coordinate) {
        let mut active = match self.index.get(&tile) {
            Some(id) => *id,
            None => self.open(tile),
        };

        for neighbor in tile.forward_neighbors() {
            if !grid.is_oil(neighbor) {
                continue;
            }
            match self.index.get(&neighbor).copied() {
                None => {
                    self.index.insert(neighbor, active);
                    if let Some(open) = self.slots[active].as_mut() {
                        open.deposit.insert(neighbor);
                    }
                }
                Some(other) if other != active => {
                    active = self.union(active, other);
                }
                Some(_) => {}
            }
        }

        if let Some(open) = self.slots[active].as_mut() {
            open.touched = self.step;
        }
        self.step += 1;
    }

    fn open(&mut self, tile: Coordinate) -> DepositId {
        let id = self.slots.len();
        self.slots.push(Some(OpenDeposit {
            deposit: Deposit::singleton(tile),
            touched: self.step,
        }));
        self.index.insert(tile, id);
        id
    }

    /// Folds the smaller deposit into the larger one and returns the
    /// survivor, which becomes the active deposit.
    fn union(&mut self, a: DepositId, b: DepositId) -> DepositId {
        let len = |slot: &Option<OpenDeposit>| slot.as_ref().map_or(0, |o| o.deposit.len());
        let (keep, drop) = if len(&self.slots[a]) >= len(&self.slots[b]) {
            (a, b)
        } else {
            (b, a)
        };

        let Some(absorbed) = self.slots[drop].take() else {
            return keep;
        };
        for tile in absorbed.deposit.iter() {
            self.index.insert(*tile, keep);
        }
        if let Some(open) = self.slots[keep].as_mut() {
            open.deposit.merge(absorbed.deposit);
        }
        keep
    }

    fn finish(self) -> Vec<Deposit> {
        let mut open: Vec<OpenDeposit> = self.slots.into_iter().flatten().collect();
        open.sort_by(|a, b| b.touched.cmp(&a.touched));
        tracing::debug!(
            deposits = open.len(),
            tiles = self.index.len(),
            "clustering finished"
        );
        open.into_iter().map(|o| o.deposit).collect()
    }
}
