//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Widest build segment that still leaves room for a version in a `u64`
pub const MAX_BUILD_DIGITS: usize = 18;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_sources(config)?;
    validate_outputs(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> crate::error::NotesError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
    .into()
}

fn validate_sources(config: &Config) -> Result<()> {
    if config.sources.dir.as_os_str().is_empty() {
        return Err(invalid("sources.dir", "directory cannot be empty"));
    }

    if config.sources.suffix.is_empty() {
        return Err(invalid("sources.suffix", "suffix cannot be empty"));
    }

    if config.sources.suffix.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(
            "sources.suffix",
            "suffix cannot start with a digit",
        ));
    }

    if config.sources.build_digits > MAX_BUILD_DIGITS {
        return Err(invalid(
            "sources.build_digits",
            format!("must be at most {}", MAX_BUILD_DIGITS),
        ));
    }

    Ok(())
}

fn validate_outputs(config: &Config) -> Result<()> {
    let html = &config.release_notes;
    let markdown = &config.changes;

    if html.enabled && html.file.as_os_str().is_empty() {
        return Err(invalid("release_notes.file", "file cannot be empty"));
    }

    if markdown.enabled && markdown.file.as_os_str().is_empty() {
        return Err(invalid("changes.file", "file cannot be empty"));
    }

    if markdown.title.contains('\n') {
        return Err(invalid("changes.title", "title must be a single line"));
    }

    if html.enabled && markdown.enabled && html.file == markdown.file {
        return Err(invalid(
            "changes.file",
            format!(
                "cannot share an output path with release_notes.file ({})",
                html.file.display()
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_dir() {
        let mut config = Config::default();
        config.sources.dir = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_digit_suffix() {
        let mut config = Config::default();
        config.sources.suffix = "0.txt".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_build_digits_limit() {
        let mut config = Config::default();
        config.sources.build_digits = MAX_BUILD_DIGITS;
        assert!(validate_config(&config).is_ok());
        config.sources.build_digits = MAX_BUILD_DIGITS + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_shared_output_path() {
        let mut config = Config::default();
        config.changes.file = config.release_notes.file.clone();
        assert!(validate_config(&config).is_err());

        // Only matters when both are generated
        config.release_notes.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_multiline_title() {
        let mut config = Config::default();
        config.changes.title = "Changes\nmore".to_string();
        assert!(validate_config(&config).is_err());
    }
}
