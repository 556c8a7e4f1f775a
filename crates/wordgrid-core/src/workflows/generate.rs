use crate::core::models::direction::Direction;
use crate::core::models::grid::{Grid, LetterGrid};
use crate::core::models::placement::Placement;
use crate::core::models::word::Word;
use crate::core::search;
use crate::core::sizing;
use crate::engine::config::{ConfigError, GenerationConfig};
use crate::engine::error::EngineError;
use crate::engine::fill;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::place_all::{self, PassOutcome};
use crate::engine::transaction::SharedGrid;
use crate::engine::utils::rng::run_rng;
use rand::Rng;
use serde::Serialize;
use tracing::{Level, debug, info, instrument, warn};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub grid: LetterGrid,
    pub words: Vec<Word>,
    /// Answer key, one entry per word in input order.
    pub placements: Vec<Placement>,
    /// Placement passes used, including the successful one.
    pub passes: usize,
}

impl GenerationResult {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Generates a filled word search grid containing every word in `words`.
///
/// Words must already be uppercase. The grid starts at the size chosen by
/// [`sizing::initial_size`] and grows by one after every failed pass until all
/// words fit or the configured growth bound is reached.
#[instrument(skip_all, name = "generation_workflow", fields(words = words.len()))]
pub fn run<S: AsRef<str>>(
    words: &[S],
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    // === Phase 0: Validation and sizing ===
    let words = Word::parse_list(words)?;
    let initial_size = sizing::initial_size(&words, config.min_size)?;
    let size_limit = config.size_limit();
    if initial_size > size_limit {
        return Err(ConfigError::InvalidValue {
            parameter: "max_size",
            reason: format!(
                "{} is smaller than the {} cells needed for the minimum size, longest word or letter count",
                size_limit, initial_size
            ),
        }
        .into());
    }
    info!(
        initial_size,
        attempt_budget = config.attempt_budget,
        "Starting grid generation."
    );

    let mut rng = run_rng(config.seed);

    // === Phase 1: Placement with growth ===
    reporter.report(Progress::PhaseStart { name: "Placement" });
    let (grid, placements, passes) =
        place_with_growth(&words, initial_size, config, &mut rng, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Fill ===
    reporter.report(Progress::PhaseStart { name: "Fill" });
    let grid = fill::run(grid, &mut rng);
    reporter.report(Progress::PhaseFinish);

    log_repeated_words(&grid, &words, config);

    info!(size = grid.size(), passes, "Grid generation complete.");
    Ok(GenerationResult {
        grid,
        words,
        placements,
        passes,
    })
}

fn place_with_growth<R: Rng + ?Sized>(
    words: &[Word],
    initial_size: usize,
    config: &GenerationConfig,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<(Grid, Vec<Placement>, usize), EngineError> {
    let directions = config.directions.directions();
    let mut size = initial_size;
    let mut pass = 0;

    loop {
        pass += 1;
        reporter.report(Progress::PassStart {
            pass,
            size,
            words: words.len() as u64,
        });

        let grid = Grid::try_blank(size).ok_or(EngineError::GenerationFailed {
            passes: pass,
            last_size: size,
        })?;
        let shared = SharedGrid::new(grid);
        let outcome = place_all::run(
            &shared,
            words,
            directions,
            config.attempt_budget,
            rng,
            reporter,
        )?;

        match outcome {
            PassOutcome::Complete(placements) => {
                reporter.report(Progress::PassFinish { complete: true });
                debug!(pass, size, "Placement pass succeeded.");
                return Ok((shared.into_inner()?, placements, pass));
            }
            PassOutcome::PlacementExhausted { unplaced } => {
                reporter.report(Progress::PassFinish { complete: false });
                debug!(
                    pass,
                    size,
                    unplaced = unplaced.len(),
                    first_unplaced = %unplaced[0],
                    "Placement pass failed, discarding grid."
                );
            }
        }

        let growth_steps = pass - 1;
        let at_max_size = size >= config.size_limit();
        if growth_steps >= config.max_growth_steps || at_max_size {
            warn!(
                passes = pass,
                last_size = size,
                "Giving up: growth bound reached before every word could be placed."
            );
            return Err(EngineError::GenerationFailed {
                passes: pass,
                last_size: size,
            });
        }

        size += 1;
        reporter.report(Progress::Message(format!(
            "Growing grid to {}x{}",
            size, size
        )));
    }
}

fn log_repeated_words(grid: &LetterGrid, words: &[Word], config: &GenerationConfig) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    for (word, hits) in repeated_words(grid, words, config.directions.directions()) {
        debug!(word = %word, hits, "Word occurs more than once in the filled grid.");
    }
}

/// Words the random fill recreated, with how often each now occurs.
fn repeated_words<'w>(
    grid: &LetterGrid,
    words: &'w [Word],
    directions: &[Direction],
) -> Vec<(&'w Word, usize)> {
    words
        .iter()
        .map(|word| (word, search::find_word(grid, word.as_str(), directions).len()))
        .filter(|&(_, hits)| hits > 1)
        .collect()
}
