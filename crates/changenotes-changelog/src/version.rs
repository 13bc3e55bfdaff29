//! Version extraction from changelog file names
//!
//! Fastlane stores one changelog per Android version code, e.g.
//! `changelogs/4300000.txt`. The version code is the release version followed
//! by a fixed-width, zero-padded build segment, so `4300000.txt` is version
//! `43` and `10200003.txt` is version `102`.

use std::path::Path;

use regex::Regex;
use tracing::trace;

use changenotes_core::config::SourcesConfig;
use changenotes_core::{ChangelogError, NotesError, Result};

/// Parsed numbers from a changelog file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Release version shown in the documents
    pub version: u64,
    /// Full numeric stem, as written in the file name
    pub version_code: String,
}

/// File naming scheme for changelog files
#[derive(Debug, Clone)]
pub struct VersionScheme {
    build_digits: usize,
    suffix: String,
    pattern: Regex,
}

impl VersionScheme {
    /// Create a scheme with a build segment width and file suffix
    pub fn new(build_digits: usize, suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        let pattern = Regex::new(&format!(
            r"^(?P<code>(?P<version>[0-9]+)[0-9]{{{}}}){}$",
            build_digits,
            regex::escape(&suffix)
        ))
        .map_err(|e| NotesError::other(format!("invalid changelog name pattern: {}", e)))?;

        Ok(Self {
            build_digits,
            suffix,
            pattern,
        })
    }

    /// Build the scheme described by the sources configuration
    pub fn from_config(sources: &SourcesConfig) -> Result<Self> {
        Self::new(sources.build_digits, sources.suffix.clone())
    }

    /// Parse a file name (basename only)
    pub fn parse_name(&self, name: &str) -> std::result::Result<ParsedName, String> {
        if !name.ends_with(&self.suffix) {
            return Err(format!("expected a name ending in '{}'", self.suffix));
        }

        let caps = self.pattern.captures(name).ok_or_else(|| {
            if self.build_digits == 0 {
                "expected a numeric version before the suffix".to_string()
            } else {
                format!(
                    "expected a numeric version followed by a {}-digit build number",
                    self.build_digits
                )
            }
        })?;

        let version = parse_number(&caps["version"])?;
        let version_code = caps["code"].to_string();

        Ok(ParsedName {
            version,
            version_code,
        })
    }

    /// Parse the version from a path's basename
    pub fn parse_path(&self, path: &Path) -> Result<ParsedName> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ChangelogError::invalid_name(path, "file name is not valid UTF-8"))?;

        let parsed = self
            .parse_name(name)
            .map_err(|reason| ChangelogError::invalid_name(path, reason))?;

        trace!(
            path = %path.display(),
            version = parsed.version,
            version_code = %parsed.version_code,
            "parsed changelog name"
        );
        Ok(parsed)
    }
}

fn parse_number(digits: &str) -> std::result::Result<u64, String> {
    digits
        .parse::<u64>()
        .map_err(|_| format!("number {} is too large", digits))
}

/// Extract the version number encoded in a changelog path
pub fn extract_version(path: &Path, scheme: &VersionScheme) -> Result<u64> {
    scheme.parse_path(path).map(|parsed| parsed.version)
}
