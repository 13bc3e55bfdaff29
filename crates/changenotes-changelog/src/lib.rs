//! changenotes Changelog - Release notes rendering from per-version changelogs
//!
//! This crate discovers fastlane-style changelog files, derives each file's
//! version from its name and renders the HTML release notes and the Markdown
//! changes document.

pub mod discovery;
pub mod formatter;
pub mod generator;
pub mod types;
pub mod version;

pub use discovery::discover_changelogs;
pub use formatter::{
    render_changes_markdown, render_release_html, ChangelogFormatter, HtmlFormatter,
    MarkdownFormatter,
};
pub use generator::{write_document, NotesGenerator};
pub use types::{
    ChangelogFile, DocumentKind, GenerationReport, RenderedDocument, StaleDocument, StaleReason,
};
pub use version::{extract_version, VersionScheme};
