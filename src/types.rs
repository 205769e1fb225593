//! Core types and structures for word-forge

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordForgeError};

/// Word combination mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CombinationMode {
    /// Every non-empty subset, words joined with a space in input order
    #[serde(rename = "all")]
    AllCombinations,
    /// Every ordered pair of distinct positions, joined with a space
    Pairs,
    /// Every ordered pair, joined with the separator
    Separated { separator: String },
    /// Each word wrapped in prefix and suffix
    Wrapped { prefix: String, suffix: String },
}

impl Default for CombinationMode {
    fn default() -> Self {
        Self::AllCombinations
    }
}

impl CombinationMode {
    /// Short name used on the command line and in configuration
    pub fn name(&self) -> &'static str {
        match self {
            CombinationMode::AllCombinations => "all",
            CombinationMode::Pairs => "pairs",
            CombinationMode::Separated { .. } => "separated",
            CombinationMode::Wrapped { .. } => "wrapped",
        }
    }

    /// All mode names, in menu order
    pub fn names() -> Vec<&'static str> {
        vec!["all", "pairs", "separated", "wrapped"]
    }

    /// Build a mode from its name and the optional parameters the user supplied.
    ///
    /// `separated` requires a separator and `wrapped` requires at least one of
    /// prefix or suffix. An explicitly supplied empty string counts as supplied.
    pub fn from_parts(
        name: &str,
        separator: Option<String>,
        prefix: Option<String>,
        suffix: Option<String>,
    ) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" | "all-combinations" | "allcombinations" => Ok(Self::AllCombinations),
            "pairs" => Ok(Self::Pairs),
            "separated" | "separator" => {
                let separator = separator
                    .ok_or_else(|| WordForgeError::missing_mode_parameter("separated", "separator"))?;
                Ok(Self::Separated { separator })
            }
            "wrapped" | "wrap" => {
                if prefix.is_none() && suffix.is_none() {
                    return Err(WordForgeError::missing_mode_parameter(
                        "wrapped",
                        "prefix or suffix",
                    ));
                }
                Ok(Self::Wrapped {
                    prefix: prefix.unwrap_or_default(),
                    suffix: suffix.unwrap_or_default(),
                })
            }
            other => Err(crate::validation_error!(
                "Unknown mode '{}' (expected one of: {})",
                other,
                Self::names().join(", ")
            )),
        }
    }

    /// Whether output size grows exponentially with the word count
    pub fn is_exponential(&self) -> bool {
        matches!(self, CombinationMode::AllCombinations)
    }
}

impl std::fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationMode::AllCombinations => write!(f, "all"),
            CombinationMode::Pairs => write!(f, "pairs"),
            CombinationMode::Separated { separator } => write!(f, "separated({:?})", separator),
            CombinationMode::Wrapped { prefix, suffix } => {
                write!(f, "wrapped({:?}, {:?})", prefix, suffix)
            }
        }
    }
}

/// Options applied after enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Shuffle the full list before truncation
    pub shuffle: bool,
    /// Keep at most this many entries
    pub limit: Option<usize>,
}

impl GenerationOptions {
    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(WordForgeError::validation("Limit must be at least 1"));
        }
        Ok(())
    }
}

/// Output of one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationResult {
    pub items: Vec<String>,
    pub count: usize,
    /// Set when all-combinations output stopped at the safety cap
    pub truncated_for_safety: bool,
}

impl CombinationResult {
    pub fn new(items: Vec<String>, truncated_for_safety: bool) -> Self {
        let count = items.len();
        Self {
            items,
            count,
            truncated_for_safety,
        }
    }

    /// Plain-text export: one combination per line
    pub fn to_text(&self) -> String {
        self.items.join("\n")
    }
}
