//! Utility functions for the engine module.
//!
//! Currently this covers explicit, optionally seeded random number generators
//! that replace any process-wide random source.

pub mod rng;
