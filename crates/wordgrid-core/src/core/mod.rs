//! # Core Module
//!
//! Stateless building blocks for word search generation.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Words, directions, spans and grids
//! - **Sizing** ([`sizing`]) - The initial grid dimension for a word list
//! - **Search** ([`search`]) - Locating words inside a finished grid
//!
//! Nothing in this module holds state across calls or touches randomness; the
//! randomized and concurrent parts live in [`crate::engine`].

pub mod models;
pub mod search;
pub mod sizing;
