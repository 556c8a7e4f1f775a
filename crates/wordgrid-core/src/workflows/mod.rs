//! # Workflows Module
//!
//! Top-level entry points that tie the [`crate::core`] data model and the
//! [`crate::engine`] together.
//!
//! - **Generation Workflow** ([`generate`]) - Validates and sizes the word list,
//!   runs placement passes with growth until every word fits, then fills the
//!   remaining cells and returns the grid with its answer key.

pub mod generate;
