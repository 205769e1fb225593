//! Error handling for word-forge


use thiserror::Error;

/// Main error type for word-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordForgeError {
    #[error("No words to combine")]
    EmptyInput,

    #[error("Mode '{mode}' requires a {parameter}")]
    MissingModeParameter { mode: String, parameter: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl WordForgeError {
    /// Create a missing mode parameter error
    pub fn missing_mode_parameter(mode: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingModeParameter {
            mode: mode.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the error comes from bad user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::MissingModeParameter { .. }
                | Self::Validation { .. }
                | Self::Cli { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => {
                "❌ No words to combine\n💡 Enter words separated by commas or new lines".to_string()
            }
            Self::MissingModeParameter { mode, parameter } => {
                format!("❌ Mode '{}' needs a {}\n💡 Use --help to see the options for each mode", mode, parameter)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or WORD_FORGE_* variables", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 The file may be corrupted or from another tool", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for WordForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for WordForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for WordForgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted => {
                Self::cli("Prompt cancelled")
            }
            other => Self::cli(other.to_string()),
        }
    }
}

impl From<regex::Error> for WordForgeError {
    fn from(err: regex::Error) -> Self {
        Self::internal(format!("Invalid pattern: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordForgeError>;



/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::WordForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::WordForgeError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordForgeError::internal(format!($fmt, $($arg)*))
    };
}
