//! Environment-driven defaults

use crate::error::Result;
use crate::history::DEFAULT_HISTORY_SIZE;
use crate::types::{CombinationMode, GenerationOptions};

pub const ENV_MODE: &str = "WORD_FORGE_MODE";
pub const ENV_SEPARATOR: &str = "WORD_FORGE_SEPARATOR";
pub const ENV_PREFIX: &str = "WORD_FORGE_PREFIX";
pub const ENV_SUFFIX: &str = "WORD_FORGE_SUFFIX";
pub const ENV_SHUFFLE: &str = "WORD_FORGE_SHUFFLE";
pub const ENV_LIMIT: &str = "WORD_FORGE_LIMIT";
pub const ENV_HISTORY_SIZE: &str = "WORD_FORGE_HISTORY_SIZE";
pub const ENV_LOG: &str = "WORD_FORGE_LOG";

/// Mode values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeOverrides {
    pub mode: Option<String>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Defaults read from `WORD_FORGE_*` variables; command-line flags override them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    pub mode_name: String,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub options: GenerationOptions,
    pub history_size: usize,
    pub log_level: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            mode_name: "all".to_string(),
            separator: None,
            prefix: None,
            suffix: None,
            options: GenerationOptions::default(),
            history_size: DEFAULT_HISTORY_SIZE,
            log_level: "warn".to_string(),
        }
    }
}

impl ForgeConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(ENV_MODE) {
            config.mode_name = mode.trim().to_lowercase();
        }
        config.separator = lookup(ENV_SEPARATOR);
        config.prefix = lookup(ENV_PREFIX);
        config.suffix = lookup(ENV_SUFFIX);

        if let Some(value) = lookup(ENV_SHUFFLE) {
            config.options.shuffle = parse_bool(ENV_SHUFFLE, &value)?;
        }
        if let Some(value) = lookup(ENV_LIMIT) {
            let limit = parse_positive(ENV_LIMIT, &value)?;
            config.options.limit = Some(limit);
        }
        if let Some(value) = lookup(ENV_HISTORY_SIZE) {
            config.history_size = parse_positive(ENV_HISTORY_SIZE, &value)?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            config.log_level = level.trim().to_string();
        }

        Ok(config)
    }

    /// Resolve the mode, letting command-line values override configured ones
    pub fn resolve_mode(&self, overrides: &ModeOverrides) -> Result<CombinationMode> {
        CombinationMode::from_parts(
            overrides.mode.as_deref().unwrap_or(&self.mode_name),
            overrides.separator.clone().or_else(|| self.separator.clone()),
            overrides.prefix.clone().or_else(|| self.prefix.clone()),
            overrides.suffix.clone().or_else(|| self.suffix.clone()),
        )
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(crate::config_error!("{} must be a boolean, got '{}'", key, other)),
    }
}

/// Parse an integer >= 1
pub fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(crate::config_error!(
            "{} must be a positive integer, got '{}'",
            key,
            value.trim()
        )),
    }
}
