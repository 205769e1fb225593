//! Work limits for exponential modes

use crate::types::CombinationMode;

/// Maximum number of items produced by all-combinations enumeration
pub const SAFETY_CAP: usize = 10_000;

/// Enumeration bound computed before any work starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyBound {
    /// Number of items the mode would produce without a cap (saturating)
    pub total_possible: u64,
    /// Items the enumerator may emit
    pub max_items: usize,
}

impl SafetyBound {
    /// Compute the bound for `mode` over `word_count` words
    pub fn for_mode(mode: &CombinationMode, word_count: usize) -> Self {
        let total_possible = total_possible(mode, word_count);
        let max_items = if mode.is_exponential() {
            usize::try_from(total_possible).unwrap_or(usize::MAX).min(SAFETY_CAP)
        } else {
            usize::try_from(total_possible).unwrap_or(usize::MAX)
        };

        Self {
            total_possible,
            max_items,
        }
    }

    /// Whether the cap cuts the enumeration short
    pub fn exceeded(&self) -> bool {
        self.total_possible > self.max_items as u64
    }
}

/// Theoretical output size for `word_count >= 2`
pub fn total_possible(mode: &CombinationMode, word_count: usize) -> u64 {
    let n = word_count as u64;
    match mode {
        CombinationMode::AllCombinations => {
            if word_count >= 64 {
                u64::MAX
            } else {
                (1u64 << word_count) - 1
            }
        }
        CombinationMode::Pairs | CombinationMode::Separated { .. } => {
            n.saturating_mul(n.saturating_sub(1))
        }
        CombinationMode::Wrapped { .. } => n,
    }
}
