//! # wordgrid Core Library
//!
//! Generates square word search grids: every supplied word is embedded along a
//! row, column or diagonal, and the remaining cells are filled with random
//! letters.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Word`, `Direction`,
//!   `Placement`, `Grid`), the initial grid sizing rule and word lookup.
//!
//! - **[`engine`]: The Logic Core.** Randomized placement of single words,
//!   concurrent placement of a whole word list against one shared grid under a
//!   per-candidate lease, and the final random fill.
//!
//! - **[`workflows`]: The Public API.** [`workflows::generate::run`] drives the
//!   full pipeline, growing the grid after failed passes until every word is
//!   placed or the configured bound is hit.
//!
//! ```ignore
//! use wordgrid::engine::config::GenerationConfigBuilder;
//! use wordgrid::engine::progress::ProgressReporter;
//! use wordgrid::workflows::generate;
//!
//! let config = GenerationConfigBuilder::new().min_size(8).build()?;
//! let result = generate::run(&["RUST", "CARGO"], &config, &ProgressReporter::new())?;
//! println!("{}", result.grid);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
