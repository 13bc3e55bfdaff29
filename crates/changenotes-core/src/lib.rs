//! changenotes Core - Core library for release-notes generation
//!
//! This crate provides the error types and configuration shared by the
//! changelog renderer and the CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ChangelogError, ConfigError, NotesError, Result};
