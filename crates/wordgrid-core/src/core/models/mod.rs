//! # Core Models Module
//!
//! Data structures shared by every stage of grid generation.
//!
//! - [`word`] - Validated uppercase words and input errors
//! - [`direction`] - The directions a word may run in, and selectable direction sets
//! - [`placement`] - A word's span inside a grid, with bounds checking and cell iteration
//! - [`grid`] - The working grid with blank cells, and the fully filled [`grid::LetterGrid`]
//!
//! ```ignore
//! use wordgrid::core::models::{direction::Direction, grid::Grid, placement::Placement};
//!
//! let grid = Grid::try_blank(4).unwrap();
//! let span = Placement::new(0, 0, Direction::DiagonalForward, 3);
//! assert!(span.fits(grid.size()));
//! ```

pub mod direction;
pub mod grid;
pub mod placement;
pub mod word;
