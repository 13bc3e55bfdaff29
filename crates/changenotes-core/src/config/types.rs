//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_BUILD_DIGITS, DEFAULT_CHANGELOG_DIR, DEFAULT_CHANGES_FILE, DEFAULT_CHANGES_TITLE,
    DEFAULT_RELEASE_INTRO, DEFAULT_RELEASE_NOTES_FILE, DEFAULT_SUFFIX,
};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where changelog files are discovered
    pub sources: SourcesConfig,

    /// HTML release notes output
    pub release_notes: ReleaseNotesConfig,

    /// Markdown changes output
    pub changes: ChangesConfig,
}

/// Changelog source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory holding one changelog file per version code
    pub dir: PathBuf,

    /// Width of the zero-padded build segment that follows the version
    /// number in each file name. `0` makes the whole numeric stem the version.
    pub build_digits: usize,

    /// File name suffix following the numeric stem
    pub suffix: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CHANGELOG_DIR),
            build_digits: DEFAULT_BUILD_DIGITS,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// HTML release notes configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesConfig {
    /// Whether to generate the HTML document
    pub enabled: bool,

    /// Output file path
    pub file: PathBuf,

    /// Static HTML fragment written before the first version section
    pub intro: String,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(DEFAULT_RELEASE_NOTES_FILE),
            intro: DEFAULT_RELEASE_INTRO.to_string(),
        }
    }
}

/// Markdown changes document configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangesConfig {
    /// Whether to generate the Markdown document
    pub enabled: bool,

    /// Output file path
    pub file: PathBuf,

    /// Top-level document title
    pub title: String,
}

impl Default for ChangesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(DEFAULT_CHANGES_FILE),
            title: DEFAULT_CHANGES_TITLE.to_string(),
        }
    }
}
