use super::models::direction::Direction;
use super::models::grid::LetterGrid;
use super::models::placement::Placement;

/// Every span in `grid` along one of `directions` that spells `word`.
///
/// Random fill can recreate a word by chance, so a generated word may be found
/// more than once.
pub fn find_word(grid: &LetterGrid, word: &str, directions: &[Direction]) -> Vec<Placement> {
    let letters = word.as_bytes();
    if letters.is_empty() {
        return Vec::new();
    }

    let size = grid.size();
    let mut found = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if grid.get(row, col) != letters[0] {
                continue;
            }
            for &direction in directions {
                let span = Placement::new(row, col, direction, letters.len());
                if span.fits(size) && spells(grid, &span, letters) {
                    found.push(span);
                }
            }
        }
    }
    found
}

fn spells(grid: &LetterGrid, span: &Placement, letters: &[u8]) -> bool {
    span.cells()
        .zip(letters)
        .all(|((r, c), &letter)| grid.get(r, c) == letter)
}
