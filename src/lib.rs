mod bounding_box;
mod clusterer;
mod color;
mod coordinate;
mod deposit;
mod encoder;
mod error;
mod formatter;
pub mod generator;
mod grid;
mod lru_clusterer;
mod report;
mod survey;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::clusterer::*;
    pub use crate::color::*;
    pub use crate::coordinate::*;
    pub use crate::deposit::*;
    pub use crate::encoder::*;
    pub use crate::error::*;
    pub use crate::formatter::{labelled, render, render_text, symbol, SYMBOLS};
    pub use crate::generator;
    pub use crate::grid::*;
    pub use crate::lru_clusterer::*;
    pub use crate::report::*;
    pub use crate::survey::*;
}
