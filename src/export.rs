//! Writing generation results to files

use std::path::Path;

use crate::error::{Result, WordForgeError};
use crate::types::CombinationResult;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One combination per line
    #[default]
    Text,
    /// Serialized result with count and truncation flag
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WordForgeError::validation(format!(
                "Unknown format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a result in the given format, newline-terminated
pub fn render(result: &CombinationResult, format: ExportFormat) -> Result<String> {
    let mut out = match format {
        ExportFormat::Text => result.to_text(),
        ExportFormat::Json => serde_json::to_string_pretty(result)?,
    };
    out.push('\n');
    Ok(out)
}

/// Write a result to `path`
pub fn write(result: &CombinationResult, path: &Path, format: ExportFormat) -> Result<()> {
    let content = render(result, format)?;
    std::fs::write(path, content).map_err(|e| {
        WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    tracing::debug!(path = %path.display(), format = %format, items = result.count, "Exported combinations");
    Ok(())
}

/// Write the plain-text export
pub fn write_text(result: &CombinationResult, path: &Path) -> Result<()> {
    write(result, path, ExportFormat::Text)
}

/// Write the JSON export
pub fn write_json(result: &CombinationResult, path: &Path) -> Result<()> {
    write(result, path, ExportFormat::Json)
}
