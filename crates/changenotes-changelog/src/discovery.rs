//! Changelog file discovery

use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::{debug, info, instrument};

use changenotes_core::config::SourcesConfig;
use changenotes_core::{ChangelogError, Result};

use crate::types::ChangelogFile;
use crate::version::VersionScheme;

/// Discover and read every changelog file under `root/sources.dir`.
///
/// All entries of the directory are matched, except names starting with `.`.
/// A missing or empty directory yields no changelogs. Every matched entry
/// must be a file whose name carries a version; the first one that doesn't
/// aborts discovery before anything is rendered.
#[instrument(skip(sources), fields(dir = %sources.dir.display()))]
pub fn discover_changelogs(root: &Path, sources: &SourcesConfig) -> Result<Vec<ChangelogFile>> {
    let scheme = VersionScheme::from_config(sources)?;
    let dir = root.join(&sources.dir);
    let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));
    debug!(pattern = %pattern, "listing changelogs");

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut changelogs = Vec::new();
    for entry in glob::glob_with(&pattern, options).map_err(ChangelogError::from)? {
        let path = entry.map_err(ChangelogError::from)?;

        if !path.is_file() {
            return Err(ChangelogError::NotAFile(path).into());
        }

        let parsed = scheme.parse_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|source| {
            ChangelogError::ReadFailed {
                path: path.clone(),
                source,
            }
        })?;

        changelogs.push(ChangelogFile::new(
            path,
            parsed.version,
            parsed.version_code,
            &content,
        ));
    }

    info!(count = changelogs.len(), dir = %dir.display(), "discovered changelogs");
    Ok(changelogs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use changenotes_core::NotesError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sources(dir: &str) -> SourcesConfig {
        SourcesConfig {
            dir: PathBuf::from(dir),
            ..SourcesConfig::default()
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let found = discover_changelogs(temp.path(), &sources("changelogs")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_discovers_and_reads() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "changelogs/300000.txt", "- three\n");
        write(temp.path(), "changelogs/1000000.txt", "- ten\n");

        let mut found = discover_changelogs(temp.path(), &sources("changelogs")).unwrap();
        found.sort_by_key(|f| f.version);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].version, 3);
        assert_eq!(found[0].content, "- three\n");
        assert_eq!(found[1].version, 10);
    }

    #[test]
    fn test_skips_hidden_entries() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "changelogs/100000.txt", "one\n");
        write(temp.path(), "changelogs/.DS_Store", "");

        let found = discover_changelogs(temp.path(), &sources("changelogs")).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_invalid_name_aborts() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "changelogs/100000.txt", "one\n");
        write(temp.path(), "changelogs/notes.txt", "oops\n");

        let err = discover_changelogs(temp.path(), &sources("changelogs")).unwrap_err();
        assert!(matches!(
            err,
            NotesError::Changelog(ChangelogError::InvalidFileName { .. })
        ));
    }

    #[test]
    fn test_subdirectory_aborts() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("changelogs/200000.txt")).unwrap();

        let err = discover_changelogs(temp.path(), &sources("changelogs")).unwrap_err();
        assert!(matches!(
            err,
            NotesError::Changelog(ChangelogError::NotAFile(_))
        ));
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "notes [en]/100000.txt", "one\n");

        let found = discover_changelogs(temp.path(), &sources("notes [en]")).unwrap();
        assert_eq!(found.len(), 1);
    }
}
