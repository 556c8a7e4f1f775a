use crate::core::models::grid::{Grid, LetterGrid};
use rand::Rng;
use tracing::{debug, instrument};

pub(crate) const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replaces every blank cell with an independently drawn letter.
#[instrument(level = "debug", skip_all, fields(size = grid.size()))]
pub(crate) fn run<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> LetterGrid {
    let blanks = grid.blank_count();
    let (size, cells) = grid.into_cells();
    let letters = cells
        .into_iter()
        .map(|cell| cell.unwrap_or_else(|| ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    debug!(blanks, "Filled blank cells with random letters.");
    LetterGrid::from_letters(size, letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fill_leaves_no_blank_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let filled = run(Grid::blank(5), &mut rng);
        assert_eq!(filled.size(), 5);
        assert!(filled.rows().flatten().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn fill_keeps_placed_letters() {
        let mut grid = Grid::blank(3);
        grid.set(0, 0, b'Q');
        grid.set(2, 1, b'Z');
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let filled = run(grid, &mut rng);
        assert_eq!(filled.get(0, 0), b'Q');
        assert_eq!(filled.get(2, 1), b'Z');
    }

    #[test]
    fn same_seed_fills_identically() {
        let a = run(Grid::blank(4), &mut ChaCha8Rng::seed_from_u64(21));
        let b = run(Grid::blank(4), &mut ChaCha8Rng::seed_from_u64(21));
        assert_eq!(a, b);
    }

    #[test]
    fn fill_draws_from_the_whole_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let filled = run(Grid::blank(40), &mut rng);
        let mut seen = [false; 26];
        for &b in filled.rows().flatten() {
            seen[(b - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
