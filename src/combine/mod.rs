//! Word combination generator
//!
//! Tokenize raw text, enumerate combinations for the selected mode, cap
//! exponential work at [`SAFETY_CAP`], then optionally shuffle and truncate.

mod bounder;
mod enumerator;
mod postprocess;
mod tokenizer;

pub use bounder::{total_possible, SafetyBound, SAFETY_CAP};
pub use enumerator::{enumerate, ordered_pairs, wrapped, SubsetGenerator};
pub use postprocess::{shuffle_items, truncate_items};
pub use tokenizer::{tokenize, WordList};

use rand::Rng;

use crate::error::{Result, WordForgeError};
use crate::types::{CombinationMode, CombinationResult, GenerationOptions};

/// Generate combinations using the thread-local random source for shuffling
pub fn generate_combinations(
    raw: &str,
    mode: &CombinationMode,
    options: &GenerationOptions,
) -> Result<CombinationResult> {
    generate_combinations_with_rng(raw, mode, options, &mut rand::thread_rng())
}

/// Generate combinations with an injected random source.
///
/// Validation happens before any enumeration. A single word is returned
/// verbatim whatever the mode.
pub fn generate_combinations_with_rng<R: Rng + ?Sized>(
    raw: &str,
    mode: &CombinationMode,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<CombinationResult> {
    options.validate()?;

    let words = tokenize(raw);
    if words.is_empty() {
        return Err(WordForgeError::EmptyInput);
    }

    let (mut items, truncated_for_safety) = if words.len() == 1 {
        (words.into_inner(), false)
    } else {
        let bound = SafetyBound::for_mode(mode, words.len());
        if bound.exceeded() {
            tracing::warn!(
                words = words.len(),
                possible = bound.total_possible,
                cap = SAFETY_CAP,
                "Too many combinations, output truncated for performance"
            );
        }
        let items = enumerate(words.as_slice(), mode, bound.max_items);
        (items, bound.exceeded())
    };

    if options.shuffle {
        shuffle_items(&mut items, rng);
    }
    truncate_items(&mut items, options.limit);

    tracing::debug!(
        mode = %mode,
        items = items.len(),
        shuffled = options.shuffle,
        truncated = truncated_for_safety,
        "Generated combinations"
    );

    Ok(CombinationResult::new(items, truncated_for_safety))
}
