use crate::core::models::direction::Direction;
use crate::core::models::placement::Placement;
use crate::core::models::word::Word;
use crate::engine::error::EngineError;
use crate::engine::placement;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::transaction::SharedGrid;
use crate::engine::utils::rng::task_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PassOutcome {
    /// Every word was placed; placements are in word order.
    Complete(Vec<Placement>),
    /// At least one word ran out of attempts. The grid must be discarded.
    PlacementExhausted { unplaced: Vec<Word> },
}

/// Places every word on `grid`, one task per word, and waits for all of them.
///
/// Task generators are seeded from `rng` before fan-out so that no generator
/// is shared across workers. A failing task raises a flag that lets its
/// siblings stop early, but every task still runs to completion before this
/// returns.
#[instrument(skip_all, name = "place_all_task", fields(size = grid.size(), words = words.len()))]
pub(crate) fn run<R: Rng + ?Sized>(
    grid: &SharedGrid,
    words: &[Word],
    directions: &[Direction],
    attempt_budget: usize,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<PassOutcome, EngineError> {
    let jobs: Vec<(&Word, u64)> = words.iter().map(|w| (w, rng.r#gen())).collect();
    let failed = AtomicBool::new(false);

    #[cfg(not(feature = "parallel"))]
    let iterator = jobs.iter();

    #[cfg(feature = "parallel")]
    let iterator = jobs.par_iter();

    let results: Vec<Result<Option<Placement>, EngineError>> = iterator
        .map(|&(word, seed)| {
            let mut rng = task_rng(seed);
            let result = placement::try_place(
                grid,
                word,
                directions,
                attempt_budget,
                &mut rng,
                &failed,
            );
            let placed = matches!(result, Ok(Some(_)));
            if !placed {
                failed.store(true, Ordering::Relaxed);
            }
            reporter.report(Progress::WordSettled { placed });
            result
        })
        .collect();

    let mut placements = Vec::with_capacity(words.len());
    let mut unplaced = Vec::new();
    for (word, result) in words.iter().zip(results) {
        match result? {
            Some(p) => placements.push(p),
            None => unplaced.push(word.clone()),
        }
    }

    if unplaced.is_empty() {
        debug!("All words placed.");
        Ok(PassOutcome::Complete(placements))
    } else {
        debug!(unplaced = unplaced.len(), "Placement pass exhausted.");
        Ok(PassOutcome::PlacementExhausted { unplaced })
    }
}
