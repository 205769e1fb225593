//! Case-preserving word replacement

use regex::{Captures, RegexBuilder};

use crate::error::{Result, WordForgeError};

/// Case shape of a matched word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    Lower,
    Upper,
    Capitalized,
    Mixed,
}

impl CasePattern {
    /// Classify the case shape of `word`
    pub fn detect(word: &str) -> Self {
        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.is_empty() {
            return CasePattern::Mixed;
        }

        if letters.iter().all(|c| c.is_lowercase()) {
            CasePattern::Lower
        } else if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
            CasePattern::Upper
        } else if letters[0].is_uppercase() && letters[1..].iter().all(|c| c.is_lowercase()) {
            CasePattern::Capitalized
        } else {
            CasePattern::Mixed
        }
    }

    /// Reshape `word` to this case pattern
    pub fn apply(self, word: &str) -> String {
        match self {
            CasePattern::Lower => word.to_lowercase(),
            CasePattern::Upper => word.to_uppercase(),
            CasePattern::Capitalized => capitalize(word),
            CasePattern::Mixed => word.to_string(),
        }
    }
}

/// Uppercase the first character, lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Replace whole-word, case-insensitive occurrences of `from` with `to`,
/// mirroring each match's case onto the replacement.
///
/// `"Word"` replaced by `"term"` becomes `"Term"`, `"WORD"` becomes `"TERM"`.
pub fn replace_preserving_case(text: &str, from: &str, to: &str) -> Result<String> {
    let from = from.trim();
    if from.is_empty() {
        return Err(WordForgeError::validation("Word to replace cannot be empty"));
    }

    // `\b` only works next to a word character; punctuation edges capture
    // their neighbour and put it back.
    let left = if from.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        r"(?P<pre>^|\W)"
    };
    let right = if from.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        r"(?P<post>\W|$)"
    };
    let pattern = format!("{}(?P<word>{}){}", left, regex::escape(from), right);
    let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    let replaced = re.replace_all(text, |caps: &Captures| {
        let pre = caps.name("pre").map_or("", |m| m.as_str());
        let post = caps.name("post").map_or("", |m| m.as_str());
        format!("{}{}{}", pre, CasePattern::detect(&caps["word"]).apply(to), post)
    });
    Ok(replaced.into_owned())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
