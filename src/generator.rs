//! Synthetic surveys for fixtures and benchmarks.

use rand::Rng;

use crate::{
    error::SurveyError,
    grid::{Grid, Tile},
};

/// Random noise where each tile holds oil with probability `sixteenths / 16`.
pub fn noise<R: Rng>(
    width: usize,
    height: usize,
    sixteenths: u32,
    rng: &mut R,
) -> Result<Grid, SurveyError> {
    if sixteenths > 16 {
        return Err(SurveyError::InvalidDensity(sixteenths));
    }
    let rows = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| match rng.gen_ratio(sixteenths, 16) {
                    true => Tile::Oil,
                    false => Tile::Empty,
                })
                .collect()
        })
        .collect();
    Ok(Grid::new(rows))
}

/// Alternating tiles; every oil tile touches the next one diagonally.
pub fn checkerboard(width: usize, height: usize) -> Grid {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| match (x + y) % 2 == 0 {
                    true => Tile::Oil,
                    false => Tile::Empty,
                })
                .collect()
        })
        .collect();
    Grid::new(rows)
}

/// `count` single-tile deposits on a stride-2 lattice.
pub fn islands(count: usize) -> Grid {
    if count == 0 {
        return Grid::default();
    }
    let columns = (count as f64).sqrt().ceil() as usize;
    let lattice_rows = count.div_ceil(columns);
    let width = columns * 2 - 1;

    let mut rows = vec![];
    for row in 0..lattice_rows {
        if row > 0 {
            rows.push(vec![Tile::Empty; width]);
        }
        let mut tiles = vec![Tile::Empty; width];
        let placed = (count - row * columns).min(columns);
        for i in 0..placed {
            tiles[i * 2] = Tile::Oil;
        }
        rows.push(tiles);
    }
    Grid::new(rows)
}
