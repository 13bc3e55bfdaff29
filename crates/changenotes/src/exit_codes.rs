//! Exit codes for the CLI

use changenotes_core::NotesError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Generated documents are out of date
pub const VALIDATION_ERROR: i32 = 5;

/// Exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<NotesError>() {
        Some(e) if e.is_config() => CONFIG_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changenotes_core::{ChangelogError, ConfigError};

    #[test]
    fn test_config_errors_map_to_config_code() {
        let err = anyhow::Error::from(NotesError::from(ConfigError::InvalidValue {
            field: "sources.dir".into(),
            message: "bad".into(),
        }));
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_other_errors_map_to_error_code() {
        let err = anyhow::Error::from(NotesError::from(ChangelogError::invalid_name(
            "x.txt", "bad",
        )));
        assert_eq!(for_error(&err), ERROR);
        assert_eq!(for_error(&anyhow::anyhow!("plain")), ERROR);
    }
}
