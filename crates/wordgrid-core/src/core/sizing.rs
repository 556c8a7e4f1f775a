use super::models::word::WordError;

/// Initial side length for a grid holding `words`.
///
/// The base size is the larger of the longest word and `isqrt(total letters) + 1`.
/// A non-zero `min_size` raises the result to at least that value; `0` leaves
/// the choice to the base size.
pub fn initial_size<S: AsRef<str>>(words: &[S], min_size: usize) -> Result<usize, WordError> {
    if words.is_empty() {
        return Err(WordError::EmptyList);
    }
    if let Some(index) = words.iter().position(|w| w.as_ref().is_empty()) {
        return Err(WordError::EmptyWord { index });
    }

    let longest = words.iter().map(|w| w.as_ref().len()).max().unwrap_or(0);
    let total: usize = words.iter().map(|w| w.as_ref().len()).sum();
    let base = longest.max(total.isqrt() + 1);

    Ok(base.max(min_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_sized_by_longest_word() {
        assert_eq!(initial_size(&["CAT", "DOG"], 0), Ok(3));
    }

    #[test]
    fn many_words_are_sized_by_total_letters() {
        // 10 words of 4 letters: isqrt(40) + 1 = 7
        let words = vec!["WORD"; 10];
        assert_eq!(initial_size(&words, 0), Ok(7));
    }

    #[test]
    fn min_size_raises_result() {
        assert_eq!(initial_size(&["CAT", "DOG"], 10), Ok(10));
    }

    #[test]
    fn min_size_below_base_is_ignored() {
        assert_eq!(initial_size(&["ELEPHANT"], 4), Ok(8));
    }

    #[test]
    fn single_letter_word_gets_two_cells() {
        assert_eq!(initial_size(&["A"], 0), Ok(2));
    }

    #[test]
    fn empty_list_is_rejected() {
        let words: [&str; 0] = [];
        assert_eq!(initial_size(&words, 0), Err(WordError::EmptyList));
    }

    #[test]
    fn empty_word_is_rejected() {
        assert_eq!(
            initial_size(&["CAT", ""], 0),
            Err(WordError::EmptyWord { index: 1 })
        );
    }
}
