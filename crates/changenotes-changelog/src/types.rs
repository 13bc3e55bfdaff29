//! Changelog types

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A per-version changelog file, read once at discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogFile {
    /// Path the file was discovered at
    pub path: PathBuf,
    /// Version number parsed from the file name
    pub version: u64,
    /// Full numeric stem of the file name (version plus build segment),
    /// kept as digits so it never overflows
    pub version_code: String,
    /// File content with line endings normalized to `\n`
    #[serde(skip)]
    pub content: String,
}

impl ChangelogFile {
    /// Create a changelog file, normalizing `\r\n` and lone `\r` to `\n`
    pub fn new(
        path: impl Into<PathBuf>,
        version: u64,
        version_code: impl Into<String>,
        content: &str,
    ) -> Self {
        Self {
            path: path.into(),
            version,
            version_code: version_code.into(),
            content: normalize_newlines(content),
        }
    }

    /// Lines of the file without their terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Number of lines in the file
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Newest-first ordering: version, then version code, then path
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        other
            .version
            .cmp(&self.version)
            .then_with(|| cmp_digits(&other.version_code, &self.version_code))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Compare two decimal digit strings by numeric value
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn normalize_newlines(content: &str) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content.to_string()
    }
}

/// Borrow changelogs in descending version order
pub fn sorted_newest_first(changelogs: &[ChangelogFile]) -> Vec<&ChangelogFile> {
    let mut sorted: Vec<&ChangelogFile> = changelogs.iter().collect();
    sorted.sort_by(|a, b| a.cmp_newest_first(b));
    sorted
}

/// Kind of generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// HTML release notes
    Html,
    /// Markdown changes document
    Markdown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// A document rendered in memory, not yet written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Document kind
    pub kind: DocumentKind,
    /// Target path
    pub path: PathBuf,
    /// Rendered content
    #[serde(skip)]
    pub content: String,
    /// Number of version sections in the document
    pub version_count: usize,
}

impl RenderedDocument {
    /// Size of the rendered content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the rendered content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Documents written (or that would be written in a dry run)
    pub documents: Vec<RenderedDocument>,
    /// Number of changelog files discovered
    pub changelog_count: usize,
    /// Whether files were left untouched
    pub dry_run: bool,
}

/// Why a generated document on disk is not current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleReason {
    /// Target file does not exist
    Missing,
    /// Target file content differs from a fresh render
    Outdated,
}

/// A generated document that needs regenerating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleDocument {
    /// Document kind
    pub kind: DocumentKind,
    /// Target path
    pub path: PathBuf,
    /// Reason the document is stale
    pub reason: StaleReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_crlf() {
        let file = ChangelogFile::new("a/4300000.txt", 43, "4300000", "- one\r\n- two\rthree\n");
        assert_eq!(file.content, "- one\n- two\nthree\n");
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_sorted_newest_first() {
        let files = vec![
            ChangelogFile::new("c/300000.txt", 3, "300000", ""),
            ChangelogFile::new("c/1000000.txt", 10, "1000000", ""),
            ChangelogFile::new("c/100000.txt", 1, "100000", ""),
        ];

        let versions: Vec<u64> = sorted_newest_first(&files).iter().map(|f| f.version).collect();
        assert_eq!(versions, vec![10, 3, 1]);
    }

    #[test]
    fn test_same_version_ordered_by_code() {
        let files = vec![
            ChangelogFile::new("c/4300000.txt", 43, "4300000", ""),
            ChangelogFile::new("c/4300002.txt", 43, "4300002", ""),
        ];

        let codes: Vec<&str> = sorted_newest_first(&files)
            .iter()
            .map(|f| f.version_code.as_str())
            .collect();
        assert_eq!(codes, vec!["4300002", "4300000"]);
    }

    #[test]
    fn test_version_code_compared_numerically() {
        let files = vec![
            ChangelogFile::new("c/a.txt", 1_000_000_000_000_000, "0100000000000000000000", ""),
            ChangelogFile::new("c/b.txt", 1_000_000_000_000_000, "100000000000000000001", ""),
            ChangelogFile::new("c/c.txt", 1_000_000_000_000_000, "99999999999999999999", ""),
        ];

        let codes: Vec<&str> = sorted_newest_first(&files)
            .iter()
            .map(|f| f.version_code.as_str())
            .collect();
        assert_eq!(
            codes,
            vec![
                "100000000000000000001",
                "0100000000000000000000",
                "99999999999999999999"
            ]
        );
    }
}
