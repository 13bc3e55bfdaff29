//! Error types for changenotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;

/// Main error type for changenotes operations
#[derive(Debug, Error)]
pub enum NotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog discovery and rendering errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// File name does not carry a parseable version number
    #[error("Invalid changelog file name {path}: {reason}")]
    InvalidFileName { path: PathBuf, reason: String },

    /// Matched entry is not a regular file
    #[error("Changelog entry is not a file: {0}")]
    NotAFile(PathBuf),

    /// Failed to read a changelog file
    #[error("Failed to read changelog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rendered document
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid glob pattern built from the source directory
    #[error("Invalid changelog pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Failed to read a glob match
    #[error("Failed to list changelogs: {0}")]
    Glob(#[from] glob::GlobError),
}

impl ChangelogError {
    /// Create an invalid file name error
    pub fn invalid_name(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl NotesError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this error comes from configuration loading or validation
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let err: NotesError = ChangelogError::invalid_name("changelogs/abc.txt", "not numeric").into();
        let message = err.to_string();
        assert!(message.contains("changelogs/abc.txt"));
        assert!(message.contains("not numeric"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_error_is_config() {
        let err: NotesError = ConfigError::InvalidValue {
            field: "sources.dir".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into();
        assert!(err.is_config());
        assert!(err.to_string().contains("sources.dir"));
    }
}
