//! Release notes generation

use std::path::{Path, PathBuf};

use changenotes_core::config::Config;
use changenotes_core::{ChangelogError, Result};
use tracing::{debug, info, instrument, warn};

use crate::discovery::discover_changelogs;
use crate::formatter::{ChangelogFormatter, HtmlFormatter, MarkdownFormatter};
use crate::types::{
    ChangelogFile, DocumentKind, GenerationReport, RenderedDocument, StaleDocument, StaleReason,
};

/// An output document and the formatter that renders it
struct Target {
    path: PathBuf,
    formatter: Box<dyn ChangelogFormatter>,
}

/// Generates the release notes documents for a project
pub struct NotesGenerator {
    config: Config,
    targets: Vec<Target>,
}

impl NotesGenerator {
    /// Create a generator for every document enabled in the configuration
    pub fn new(config: Config) -> Self {
        let mut targets = Vec::new();

        if config.release_notes.enabled {
            targets.push(Target {
                path: config.release_notes.file.clone(),
                formatter: Box::new(HtmlFormatter::from_config(&config.release_notes)),
            });
        }

        if config.changes.enabled {
            targets.push(Target {
                path: config.changes.file.clone(),
                formatter: Box::new(MarkdownFormatter::from_config(&config.changes)),
            });
        }

        Self { config, targets }
    }

    /// Add an extra output document
    pub fn with_target<F: ChangelogFormatter + 'static>(
        mut self,
        path: impl Into<PathBuf>,
        formatter: F,
    ) -> Self {
        self.targets.push(Target {
            path: path.into(),
            formatter: Box::new(formatter),
        });
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Kinds of the documents this generator produces
    pub fn kinds(&self) -> Vec<DocumentKind> {
        self.targets.iter().map(|t| t.formatter.kind()).collect()
    }

    /// Discover the changelogs of a project
    pub fn discover(&self, root: &Path) -> Result<Vec<ChangelogFile>> {
        discover_changelogs(root, &self.config.sources)
    }

    /// Render every document from already discovered changelogs.
    ///
    /// Each formatter orders the changelogs on its own.
    pub fn render_changelogs(&self, changelogs: &[ChangelogFile]) -> Vec<RenderedDocument> {
        self.targets
            .iter()
            .map(|target| {
                let kind = target.formatter.kind();
                let content = target.formatter.format(changelogs);
                debug!(%kind, path = %target.path.display(), bytes = content.len(), "document rendered");
                RenderedDocument {
                    kind,
                    path: target.path.clone(),
                    content,
                    version_count: changelogs.len(),
                }
            })
            .collect()
    }

    /// Discover and render every document without writing
    #[instrument(skip(self))]
    pub fn render(&self, root: &Path) -> Result<Vec<RenderedDocument>> {
        let changelogs = self.discover(root)?;
        Ok(self.render_changelogs(&changelogs))
    }

    /// Render and write every document.
    ///
    /// All changelog names are validated before the first write, so a bad
    /// file name leaves every output untouched.
    #[instrument(skip(self))]
    pub fn write(&self, root: &Path) -> Result<GenerationReport> {
        let changelogs = self.discover(root)?;
        let documents = self.render_changelogs(&changelogs);

        for document in &documents {
            write_document(&root.join(&document.path), &document.content)?;
            info!(kind = %document.kind, path = %document.path.display(), "document written");
        }

        Ok(GenerationReport {
            documents,
            changelog_count: changelogs.len(),
            dry_run: false,
        })
    }

    /// Render every document and report what would be written
    #[instrument(skip(self))]
    pub fn dry_run(&self, root: &Path) -> Result<GenerationReport> {
        let changelogs = self.discover(root)?;
        let documents = self.render_changelogs(&changelogs);

        Ok(GenerationReport {
            documents,
            changelog_count: changelogs.len(),
            dry_run: true,
        })
    }

    /// Compare freshly rendered documents with the files on disk
    #[instrument(skip(self))]
    pub fn check(&self, root: &Path) -> Result<Vec<StaleDocument>> {
        let mut stale = Vec::new();

        for document in self.render(root)? {
            let path = root.join(&document.path);
            let reason = match std::fs::read(&path) {
                Ok(existing) if existing == document.content.as_bytes() => continue,
                Ok(_) => StaleReason::Outdated,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => StaleReason::Missing,
                Err(source) => return Err(ChangelogError::ReadFailed { path, source }.into()),
            };

            warn!(kind = %document.kind, path = %document.path.display(), ?reason, "document is stale");
            stale.push(StaleDocument {
                kind: document.kind,
                path: document.path,
                reason,
            });
        }

        Ok(stale)
    }
}

/// Write a document, creating parent directories and replacing any existing content
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    };

    write().map_err(|source| {
        ChangelogError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
