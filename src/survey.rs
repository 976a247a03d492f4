use std::path::Path;
use std::sync::OnceLock;

use crate::{
    clusterer::Strategy,
    deposit::Deposit,
    encoder::Encoder,
    error::SurveyError,
    formatter,
    grid::Grid,
};

/// A survey grid and its deposits, computed on first request.
///
/// The grid is never mutated; survey a changed grid with a new `Survey`.
#[derive(Debug)]
pub struct Survey {
    grid: Grid,
    strategy: Strategy,
    deposits: OnceLock<Vec<Deposit>>,
}

impl Survey {
    pub fn new(grid: Grid) -> Self {
        Self::with_strategy(grid, Strategy::default())
    }

    pub fn with_strategy(grid: Grid, strategy: Strategy) -> Self {
        Self {
            grid,
            strategy,
            deposits: OnceLock::new(),
        }
    }

    pub fn read<P: AsRef<Path>>(path: P, strategy: Strategy) -> Result<Self, SurveyError> {
        Ok(Self::with_strategy(Grid::read(path)?, strategy))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Deposits ordered most-recently-touched first.
    pub fn deposits(&self) -> &[Deposit] {
        self.deposits.get_or_init(|| {
            tracing::debug!(
                strategy = %self.strategy,
                rows = self.grid.height(),
                "detecting deposits"
            );
            self.strategy.cluster(&self.grid)
        })
    }

    pub fn render(&self) -> Vec<String> {
        formatter::render(self.grid.height(), self.deposits())
    }

    pub fn render_text(&self) -> String {
        formatter::render_text(self.grid.height(), self.deposits())
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.grid, self.deposits())
    }
}

impl From<Grid> for Survey {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_are_computed_once() {
        let survey = Survey::new(Grid::from_lines(["X.XXX", "...XX", ".X.XX", "....X", "XX..."]));
        let first = survey.deposits();
        let second = survey.deposits();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn strategies_agree() {
        let rows = ["XX..X", "..X.X", "X...X", ".XX..", "X..XX"];
        let indexed = Survey::with_strategy(Grid::from_lines(rows), Strategy::Indexed);
        let lru = Survey::with_strategy(Grid::from_lines(rows), Strategy::Lru);
        assert_eq!(indexed.deposits(), lru.deposits());
        assert_eq!(indexed.render(), lru.render());
    }

    #[test]
    fn empty_survey() {
        let survey = Survey::from(Grid::default());
        assert!(survey.deposits().is_empty());
        assert!(survey.render().is_empty());
    }

    #[test]
    fn survey_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Survey>();
    }
}
