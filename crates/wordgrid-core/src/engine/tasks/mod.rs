//! Units of work scheduled by the generation workflow.

pub mod place_all;
