//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changenotes.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changenotes.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".changenotes.yaml";

/// Fastlane changelog directory for the default locale
pub const DEFAULT_CHANGELOG_DIR: &str = "fastlane/metadata/android/en-US/changelogs";

/// Build segment width, as in `4300000.txt`
pub const DEFAULT_BUILD_DIGITS: usize = 5;

/// Changelog file suffix
pub const DEFAULT_SUFFIX: &str = ".txt";

/// HTML release notes shipped as an app asset
pub const DEFAULT_RELEASE_NOTES_FILE: &str = "app/src/main/assets/release.html";

/// Markdown changes document for the docs site
pub const DEFAULT_CHANGES_FILE: &str = "docs/changes.md";

/// Markdown document title
pub const DEFAULT_CHANGES_TITLE: &str = "Forkyz Changelog";

/// HTML fragment written before the first version section
pub const DEFAULT_RELEASE_INTRO: &str = concat!(
    "\n",
    "        <h1>Forkyz</h1>\n",
    "\n",
    "        <p>\n",
    "            This is an unofficial fork of the Shortyz\n",
    "            crossword app. It implements a number of new features and\n",
    "            removes some non-open libraries / trackers.\n",
    "        </p>\n",
    "    ",
);

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".changenotes.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# changenotes configuration

sources:
  dir: fastlane/metadata/android/en-US/changelogs
  build_digits: 5
  suffix: .txt

release_notes:
  enabled: true
  file: app/src/main/assets/release.html

changes:
  enabled: true
  file: docs/changes.md
  title: Forkyz Changelog
"#;
