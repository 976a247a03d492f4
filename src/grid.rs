use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, error::SurveyError};

pub const OIL_MARKER: char = 'X';
pub const EMPTY_MARKER: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Oil,
    Empty,
}

impl Tile {
    pub fn from_marker(marker: char) -> Self {
        if marker == OIL_MARKER {
            Tile::Oil
        } else {
            Tile::Empty
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Tile::Oil => OIL_MARKER,
            Tile::Empty => EMPTY_MARKER,
        }
    }

    pub fn is_oil(&self) -> bool {
        matches!(self, Tile::Oil)
    }
}

/// Survey grid: rows of tiles, not necessarily of equal length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Builds a grid from text lines, dropping trailing whitespace only so
    /// that column positions are preserved.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end().chars().map(Tile::from_marker).collect())
            .collect();
        Self { rows }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SurveyError> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| SurveyError::io(path, e))?;
        Self::read_from(BufReader::new(f)).map_err(|e| SurveyError::io(path, e))
    }

    pub fn read_from<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        Ok(Self::from_lines(lines))
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn row_len(&self, y: usize) -> Option<usize> {
        self.rows.get(y).map(|row| row.len())
    }

    /// `None` outside the grid, including past the end of a short row.
    pub fn tile(&self, c: Coordinate) -> Option<Tile> {
        self.rows.get(c.y).and_then(|row| row.get(c.x)).copied()
    }

    pub fn is_oil(&self, c: Coordinate) -> bool {
        self.tile(c).is_some_and(|t| t.is_oil())
    }

    /// Oil tiles in row-major scan order.
    pub fn oil_tiles(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, t)| t.is_oil())
                .map(move |(x, _)| Coordinate::new(x, y))
        })
    }

    pub fn oil_count(&self) -> usize {
        self.rows.iter().flatten().filter(|t| t.is_oil()).count()
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Tile::marker).collect())
            .collect()
    }

    pub fn to_text(&self) -> String {
        self.to_lines().iter().join("\n")
    }
}

impl FromStr for Grid {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_lines(s.lines()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Grid {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
