//! Combination enumeration for each mode

use crate::types::CombinationMode;

/// Depth-first subset enumerator.
///
/// Yields every non-empty subset of positions, words joined with a single
/// space in input order. Order matches recursive backtracking with increasing
/// start index: for `[a, b, c]` it yields `a`, `a b`, `a b c`, `a c`, `b`,
/// `b c`, `c`.
pub struct SubsetGenerator<'a> {
    words: &'a [String],
    stack: Vec<usize>,
    started: bool,
}

impl<'a> SubsetGenerator<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self {
            words,
            stack: Vec::with_capacity(words.len()),
            started: false,
        }
    }

    /// Move to the next subset. Returns false once every subset was visited.
    fn advance(&mut self) -> bool {
        let n = self.words.len();

        if !self.started {
            self.started = true;
            if n == 0 {
                return false;
            }
            self.stack.push(0);
            return true;
        }

        let last = match self.stack.last() {
            Some(&last) => last,
            None => return false,
        };

        if last + 1 < n {
            // Extend with the next index
            self.stack.push(last + 1);
            return true;
        }

        // Backtrack: drop the tail, then move the new tail one step right
        self.stack.pop();
        match self.stack.last_mut() {
            Some(top) => {
                *top += 1;
                true
            }
            None => false,
        }
    }

    fn current(&self) -> String {
        let mut out = String::new();
        for (pos, &idx) in self.stack.iter().enumerate() {
            if pos > 0 {
                out.push(' ');
            }
            out.push_str(&self.words[idx]);
        }
        out
    }
}

impl Iterator for SubsetGenerator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.current())
        } else {
            None
        }
    }
}

/// Every ordered pair of distinct positions, `i` outer and `j` inner
pub fn ordered_pairs(words: &[String], separator: &str) -> Vec<String> {
    let mut out = Vec::new();

    for (i, first) in words.iter().enumerate() {
        for (j, second) in words.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut item = String::with_capacity(first.len() + separator.len() + second.len());
            item.push_str(first);
            item.push_str(separator);
            item.push_str(second);
            out.push(item);
        }
    }

    out
}

/// One entry per word: `prefix + word + suffix`
pub fn wrapped(words: &[String], prefix: &str, suffix: &str) -> Vec<String> {
    words
        .iter()
        .map(|w| format!("{}{}{}", prefix, w, suffix))
        .collect()
}

/// Enumerate `mode` over `words`, emitting at most `max_items` entries
pub fn enumerate(words: &[String], mode: &CombinationMode, max_items: usize) -> Vec<String> {
    match mode {
        CombinationMode::AllCombinations => SubsetGenerator::new(words).take(max_items).collect(),
        CombinationMode::Pairs => ordered_pairs(words, " "),
        CombinationMode::Separated { separator } => ordered_pairs(words, separator),
        CombinationMode::Wrapped { prefix, suffix } => wrapped(words, prefix, suffix),
    }
}
