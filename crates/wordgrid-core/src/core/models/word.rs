use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word list is empty, at least one word is required")]
    EmptyList,

    #[error("Word at position {index} is empty")]
    EmptyWord { index: usize },

    #[error("Word '{word}' contains '{character}', only uppercase letters A-Z are allowed")]
    InvalidCharacter { word: String, character: char },
}

/// A non-empty run of uppercase ASCII letters.
///
/// Case normalization belongs to the caller; `Word` only accepts input that is
/// already uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Validates every entry of `words`, reporting the first offending position.
    pub fn parse_list<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, WordError> {
        if words.is_empty() {
            return Err(WordError::EmptyList);
        }
        words
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.as_ref().parse::<Word>().map_err(|e| match e {
                    WordError::EmptyWord { .. } => WordError::EmptyWord { index },
                    other => other,
                })
            })
            .collect()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(WordError::EmptyWord { index: 0 });
        }
        if let Some(character) = s.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter {
                word: s.to_string(),
                character,
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
