//! # Engine Module
//!
//! The randomized, concurrent half of grid generation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Attempt budget, growth bounds, direction set and seed
//! - **Error Handling** ([`error`]) - Errors surfaced to callers of the workflows
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting of passes and words
//! - **Placement** (`placement`) - Validate-then-write of one word at random candidates
//! - **Grid Lease** (`transaction`) - Mutual exclusion around each candidate's check and write
//! - **Coordination** (`tasks::place_all`) - One concurrent task per word on a shared grid
//! - **Fill** (`fill`) - Random letters for every cell left blank
//!
//! ## Concurrency
//!
//! With the default `parallel` feature the per-word tasks of a pass run on the
//! rayon thread pool. Each task owns a generator seeded from the run generator,
//! and all grid access goes through a lease held for exactly one candidate.

pub mod config;
pub mod error;
pub(crate) mod fill;
pub(crate) mod placement;
pub mod progress;
pub(crate) mod tasks;
pub(crate) mod transaction;
pub(crate) mod utils;
