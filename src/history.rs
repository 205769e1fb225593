//! Bounded history of recent generations, owned by the calling session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

use crate::error::{Result, WordForgeError};
use crate::types::{CombinationMode, CombinationResult};

/// Default number of entries kept
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// One recorded generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub mode: CombinationMode,
    pub word_count: usize,
    pub item_count: usize,
    #[serde(default)]
    pub truncated_for_safety: bool,
    /// First few items, for display
    #[serde(default)]
    pub preview: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    const PREVIEW_LEN: usize = 3;

    pub fn new(mode: &CombinationMode, word_count: usize, result: &CombinationResult) -> Self {
        Self {
            mode: mode.clone(),
            word_count,
            item_count: result.count,
            truncated_for_safety: result.truncated_for_safety,
            preview: result.items.iter().take(Self::PREVIEW_LEN).cloned().collect(),
            created_at: Utc::now(),
        }
    }
}

/// Most-recent-first history with a fixed capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl SessionHistory {
    /// Create an empty history. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Push to the front, dropping the oldest entries beyond capacity
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change capacity, dropping the oldest entries if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    /// Load history from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| WordForgeError::parse(e.to_string(), Some(content)))
    }

    /// Load history from file, or start empty when the file does not exist yet
    pub fn load_or_new(path: &Path, capacity: usize) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(capacity));
        }
        let mut history = Self::load(path)?;
        history.set_capacity(capacity);
        Ok(history)
    }

    /// Save history to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                WordForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::internal_error!("Failed to serialize history: {}", e))?;

        std::fs::write(path, content).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
