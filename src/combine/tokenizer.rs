//! Raw text to word list

/// Characters that separate words in raw input
const SEPARATORS: &[char] = &['\n', ','];

/// Ordered list of trimmed, non-empty words. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

/// Split raw input on runs of newlines and commas.
///
/// Pieces are trimmed and dropped when empty, so consecutive separators
/// collapse. Order of appearance is preserved; no case folding or dedup.
pub fn tokenize(raw: &str) -> WordList {
    let words = raw
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    WordList { words }
}
