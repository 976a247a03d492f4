use std::collections::BTreeMap;

use itertools::Itertools;

use crate::deposit::Deposit;

/// Symbols cycled through when labelling deposits.
pub const SYMBOLS: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn symbol(index: usize) -> char {
    SYMBOLS[index % SYMBOLS.len()] as char
}

/// Deposits paired with their symbol, in symbol order.
///
/// The clusterer lists the most recently touched deposit first, so labels
/// are handed out back to front; deposits found early in the scan get the
/// early letters.
pub fn labelled(deposits: &[Deposit]) -> impl Iterator<Item = (char, &Deposit)> + '_ {
    deposits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, deposit)| (symbol(i), deposit))
}

/// Renders deposits onto `height` text rows, one symbol per deposit.
///
/// Empty tiles become spaces and each row stops at its last deposit tile.
pub fn render(height: usize, deposits: &[Deposit]) -> Vec<String> {
    let mut rows: Vec<BTreeMap<usize, char>> = vec![BTreeMap::new(); height];
    for (symbol, deposit) in labelled(deposits) {
        for tile in deposit {
            if let Some(row) = rows.get_mut(tile.y) {
                row.insert(tile.x, symbol);
            }
        }
    }

    rows.into_iter()
        .map(|row| {
            let mut line = String::new();
            for (x, symbol) in row {
                let pad = x - line.chars().count();
                line.extend(std::iter::repeat(' ').take(pad));
                line.push(symbol);
            }
            line
        })
        .collect()
}

pub fn render_text(height: usize, deposits: &[Deposit]) -> String {
    render(height, deposits).iter().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clusterer::{Clusterer, IndexedClusterer},
        grid::Grid,
    };

    #[test]
    fn symbols_cycle_after_62() {
        assert_eq!(symbol(0), 'A');
        assert_eq!(symbol(25), 'Z');
        assert_eq!(symbol(26), 'a');
        assert_eq!(symbol(61), '9');
        assert_eq!(symbol(62), 'A');
    }

    #[test]
    fn original_survey_rendering() {
        let rows = ["X.XXX", "...XX", ".X.XX", "....X", "XX..."];
        let deposits = IndexedClusterer.cluster(&Grid::from_lines(rows));
        let text = render(rows.len(), &deposits);
        assert_eq!(text, vec!["A CCC", "   CC", " B CC", "    C", "DD"]);
    }

    #[test]
    fn rows_without_deposits_are_blank() {
        let grid = Grid::from_lines(["..", "X.", "...."]);
        let deposits = IndexedClusterer.cluster(&grid);
        assert_eq!(render_text(grid.height(), &deposits), "\nA\n");
    }

    #[test]
    fn least_recent_deposit_gets_first_symbol() {
        let a = Deposit::singleton((0, 0).into());
        let b = Deposit::singleton((2, 0).into());
        // b was touched last, so it is listed first
        let listed = [b.clone(), a.clone()];
        let labels: Vec<_> = labelled(&listed).collect();
        assert_eq!(labels, vec![('A', &a), ('B', &b)]);
    }
}
