use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Word list is empty. Expected comma-separated words (e.g., 'cat,dog').")]
    EmptyWordList,

    #[error("Entry {position} of the word list is empty in '{list}'.")]
    EmptyEntry { position: usize, list: String },
}

/// Splits a comma-separated word list and normalizes every entry to uppercase.
///
/// Surrounding whitespace is trimmed; letter validation is left to the core.
pub fn parse_word_list(raw: &str) -> Result<Vec<String>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyWordList);
    }
    raw.split(',')
        .enumerate()
        .map(|(i, entry)| {
            let word = entry.trim();
            if word.is_empty() {
                Err(ParseError::EmptyEntry {
                    position: i + 1,
                    list: raw.to_string(),
                })
            } else {
                Ok(word.to_uppercase())
            }
        })
        .collect()
}
