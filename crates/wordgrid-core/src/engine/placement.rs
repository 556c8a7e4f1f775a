use super::error::EngineError;
use super::transaction::SharedGrid;
use crate::core::models::direction::Direction;
use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use crate::core::models::word::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Writes `word` along `candidate` if every target cell is blank or already
/// holds the matching letter. Nothing is written unless the whole span validates.
pub(crate) fn place_candidate(grid: &mut Grid, word: &Word, candidate: &Placement) -> bool {
    if candidate.length != word.len() || !candidate.fits(grid.size()) {
        return false;
    }

    let letters = word.as_bytes();
    let compatible = candidate
        .cells()
        .zip(letters)
        .all(|((r, c), &letter)| grid.get(r, c).is_none_or(|l| l == letter));
    if !compatible {
        return false;
    }

    for ((r, c), &letter) in candidate.cells().zip(letters) {
        grid.set(r, c, letter);
    }
    true
}

/// Tries up to `attempt_budget` random candidates for `word` on the shared grid.
///
/// Each candidate is validated and written under a single lease. Returns
/// `Ok(None)` when the budget runs out, or early when `abandon` is raised by a
/// sibling that already failed the pass.
pub(crate) fn try_place<R: Rng + ?Sized>(
    grid: &SharedGrid,
    word: &Word,
    directions: &[Direction],
    attempt_budget: usize,
    rng: &mut R,
    abandon: &AtomicBool,
) -> Result<Option<Placement>, EngineError> {
    let size = grid.size();
    if size == 0 {
        return Ok(None);
    }

    for attempt in 1..=attempt_budget {
        if abandon.load(Ordering::Relaxed) {
            trace!(word = %word, attempt, "Pass already failed, abandoning word.");
            return Ok(None);
        }

        let direction = *directions
            .choose(rng)
            .ok_or_else(|| EngineError::Internal("Direction set is empty".to_string()))?;
        let candidate = Placement::new(
            rng.gen_range(0..size),
            rng.gen_range(0..size),
            direction,
            word.len(),
        );

        // Bounds depend only on the fixed size; skip the lease for spans that cannot fit.
        if !candidate.fits(size) {
            continue;
        }

        if grid.transaction(|g| place_candidate(g, word, &candidate))? {
            trace!(word = %word, attempt, ?candidate, "Word placed.");
            return Ok(Some(candidate));
        }
    }

    trace!(word = %word, attempt_budget, "Attempt budget exhausted.");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn horizontal_candidate_on_blank_grid_writes_top_row_only() {
        let mut grid = Grid::blank(2);
        let candidate = Placement::new(0, 0, Direction::Horizontal, 2);

        assert!(place_candidate(&mut grid, &word("AB"), &candidate));
        assert_eq!(grid.get(0, 0), Some(b'A'));
        assert_eq!(grid.get(0, 1), Some(b'B'));
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(1, 1), None);
    }

    #[test]
    fn crossing_on_matching_letter_is_accepted() {
        let mut grid = Grid::blank(3);
        assert!(place_candidate(
            &mut grid,
            &word("CAT"),
            &Placement::new(1, 0, Direction::Horizontal, 3)
        ));
        assert!(place_candidate(
            &mut grid,
            &word("BAD"),
            &Placement::new(0, 1, Direction::Vertical, 3)
        ));
        assert_eq!(grid.get(1, 1), Some(b'A'));
        assert_eq!(grid.get(2, 1), Some(b'D'));
    }

    #[test]
    fn crossing_on_conflicting_letter_leaves_grid_untouched() {
        let mut grid = Grid::blank(3);
        assert!(place_candidate(
            &mut grid,
            &word("CAT"),
            &Placement::new(1, 0, Direction::Horizontal, 3)
        ));
        let before = grid.clone();

        assert!(!place_candidate(
            &mut grid,
            &word("BOX"),
            &Placement::new(0, 1, Direction::Vertical, 3)
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn out_of_bounds_candidate_is_rejected() {
        let mut grid = Grid::blank(3);
        assert!(!place_candidate(
            &mut grid,
            &word("CAT"),
            &Placement::new(1, 1, Direction::DiagonalBackward, 3)
        ));
        assert_eq!(grid.blank_count(), 9);
    }

    #[test]
    fn backward_diagonal_writes_up_and_left() {
        let mut grid = Grid::blank(3);
        assert!(place_candidate(
            &mut grid,
            &word("CAT"),
            &Placement::new(2, 2, Direction::DiagonalBackward, 3)
        ));
        assert_eq!(grid.get(2, 2), Some(b'C'));
        assert_eq!(grid.get(1, 1), Some(b'A'));
        assert_eq!(grid.get(0, 0), Some(b'T'));
    }

    #[test]
    fn try_place_succeeds_on_roomy_grid() {
        let shared = SharedGrid::new(Grid::blank(6));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let abandon = AtomicBool::new(false);

        let placed = try_place(
            &shared,
            &word("RUST"),
            &Direction::FORWARD,
            100,
            &mut rng,
            &abandon,
        )
        .unwrap()
        .expect("a 4-letter word fits a blank 6x6 grid");

        let grid = shared.into_inner().unwrap();
        let spelled: Vec<u8> = placed
            .cells()
            .map(|(r, c)| grid.get(r, c).unwrap())
            .collect();
        assert_eq!(spelled, b"RUST");
        assert_eq!(grid.blank_count(), 36 - 4);
    }

    #[test]
    fn try_place_exhausts_budget_when_word_cannot_fit() {
        let shared = SharedGrid::new(Grid::blank(3));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let abandon = AtomicBool::new(false);

        let placed = try_place(
            &shared,
            &word("LONGER"),
            &Direction::FORWARD,
            50,
            &mut rng,
            &abandon,
        )
        .unwrap();
        assert!(placed.is_none());
        assert_eq!(shared.into_inner().unwrap().blank_count(), 9);
    }

    #[test]
    fn try_place_fails_when_every_cell_conflicts() {
        let mut full = Grid::blank(2);
        for r in 0..2 {
            for c in 0..2 {
                full.set(r, c, b'X');
            }
        }
        let shared = SharedGrid::new(full.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let abandon = AtomicBool::new(false);

        let placed = try_place(
            &shared,
            &word("AB"),
            &Direction::FORWARD,
            100,
            &mut rng,
            &abandon,
        )
        .unwrap();
        assert!(placed.is_none());
        assert_eq!(shared.into_inner().unwrap(), full);
    }

    #[test]
    fn try_place_reuses_matching_letters() {
        let mut prefilled = Grid::blank(2);
        for r in 0..2 {
            for c in 0..2 {
                prefilled.set(r, c, b'A');
            }
        }
        let shared = SharedGrid::new(prefilled.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let abandon = AtomicBool::new(false);

        let placed = try_place(
            &shared,
            &word("AA"),
            &Direction::FORWARD,
            100,
            &mut rng,
            &abandon,
        )
        .unwrap();
        assert!(placed.is_some());
        assert_eq!(shared.into_inner().unwrap(), prefilled);
    }

    #[test]
    fn raised_abandon_flag_stops_before_any_attempt() {
        let shared = SharedGrid::new(Grid::blank(5));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let abandon = AtomicBool::new(true);

        let placed = try_place(
            &shared,
            &word("OK"),
            &Direction::FORWARD,
            100,
            &mut rng,
            &abandon,
        )
        .unwrap();
        assert!(placed.is_none());
        assert_eq!(shared.into_inner().unwrap().blank_count(), 25);
    }
}
