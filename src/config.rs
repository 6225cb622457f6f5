//! Application configuration.
//!
//! Compile-time constants and text assets live here alongside the runtime
//! [`Config`], which is read from an optional TOML file. Every field of the
//! file is optional; missing fields take the defaults below.
//!
//! ```toml
//! [filesystem]
//! resolve = "strict"        # or "lenient"
//! copy = "deep"             # or "shared"
//! cd_into_files = false
//! default_file_content = "This is a new file."
//!
//! [terminal]
//! prompt = "$"
//! welcome = true
//! max_output_lines = 1000
//! max_command_history = 100
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::error::ConfigError;
use crate::core::{CopyMode, FsOptions, ResolveMode};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome text shown when a session starts.
pub const WELCOME_TEXT: &str = include_str!("../assets/text/welcome.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "vfsh";

// =============================================================================
// Defaults
// =============================================================================

/// Initial content of files created by `touch`.
pub const DEFAULT_FILE_CONTENT: &str = "This is a new file.";

/// Prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "$";

/// Prompt shown while `edit` waits for new content.
pub const EDIT_PROMPT: &str = "Enter new content:";

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime configuration, usually read from a TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub filesystem: FilesystemConfig,
    pub terminal: TerminalConfig,
}

/// `[filesystem]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesystemConfig {
    pub resolve: ResolveMode,
    pub copy: CopyMode,
    pub cd_into_files: bool,
    pub default_file_content: String,
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            resolve: ResolveMode::default(),
            copy: CopyMode::default(),
            cd_into_files: false,
            default_file_content: DEFAULT_FILE_CONTENT.to_string(),
        }
    }
}

impl FilesystemConfig {
    /// Tree store options described by this table.
    pub fn options(&self) -> FsOptions {
        FsOptions {
            resolve: self.resolve,
            copy: self.copy,
            cd_into_files: self.cd_into_files,
        }
    }
}

/// `[terminal]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    pub prompt: String,
    pub welcome: bool,
    pub max_output_lines: usize,
    pub max_command_history: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: true,
            max_output_lines: MAX_TERMINAL_HISTORY,
            max_command_history: MAX_COMMAND_HISTORY,
        }
    }
}

impl Config {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Turn on everything in [`FsOptions::compat`].
    pub fn apply_compat(&mut self) {
        let compat = FsOptions::compat();
        self.filesystem.resolve = compat.resolve;
        self.filesystem.copy = compat.copy;
        self.filesystem.cd_into_files = compat.cd_into_files;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.filesystem.options(), FsOptions::default());
        assert_eq!(config.filesystem.default_file_content, DEFAULT_FILE_CONTENT);
        assert_eq!(config.terminal.prompt, DEFAULT_PROMPT);
        assert!(config.terminal.welcome);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
            [filesystem]
            resolve = "lenient"
            copy = "shared"

            [terminal]
            welcome = false
            "#,
        );
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.filesystem.resolve, ResolveMode::Lenient);
        assert_eq!(config.filesystem.copy, CopyMode::Shared);
        assert!(!config.filesystem.cd_into_files);
        assert!(!config.terminal.welcome);
        assert_eq!(config.terminal.max_output_lines, MAX_TERMINAL_HISTORY);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let file = write_config("[filesystem]\nsymlinks = true\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_bad_mode() {
        let file = write_config("[filesystem]\nresolve = \"sloppy\"\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_apply_compat() {
        let mut config = Config::default();
        config.apply_compat();
        assert_eq!(config.filesystem.options(), FsOptions::compat());
    }
}
