//! Word Forge - word combination generator
//!
//! Turns a list of words into power-set combinations, ordered pairs,
//! separator-joined pairs or prefix/suffix wrapped words, with a safety cap
//! on exponential output plus optional shuffling and truncation.

pub mod combine;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordForgeError};
pub use types::{CombinationMode, CombinationResult, GenerationOptions};

// Re-export main functionality
pub use combine::{generate_combinations, generate_combinations_with_rng, tokenize, WordList, SAFETY_CAP};
pub use config::ForgeConfig;
pub use history::{HistoryEntry, SessionHistory};
pub use text::replace_preserving_case;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
