//! Shuffle and truncation applied after enumeration

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform Fisher–Yates permutation using the caller's random source
pub fn shuffle_items<R: Rng + ?Sized>(items: &mut [String], rng: &mut R) {
    items.shuffle(rng);
}

/// Keep at most `limit` leading entries
pub fn truncate_items(items: &mut Vec<String>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}
