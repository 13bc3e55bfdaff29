//! Changelog formatters

mod html;
mod markdown;

pub use html::{release_line, render_release_html, HtmlFormatter};
pub use markdown::{render_changes_markdown, MarkdownFormatter};

use crate::types::{ChangelogFile, DocumentKind};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format all changelogs into one document, newest version first
    fn format(&self, changelogs: &[ChangelogFile]) -> String;

    /// Kind of document this formatter produces
    fn kind(&self) -> DocumentKind;
}
