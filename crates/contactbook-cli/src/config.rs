//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--book`, `--no-color`; applied at the call-site)
//! 2. Environment variables, `CONTACTBOOK__<SECTION>__<KEY>`
//! 3. Config file (`--config`, or [`AppConfig::config_path`] if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the address book lives.
    pub storage: StorageConfig,
    /// Birthday reminder settings.
    pub birthdays: BirthdayConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    pub window_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("addressbook.json"),
        }
    }
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: contactbook_core::domain::DEFAULT_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(file_source(&path, required))
            .add_source(
                config::Environment::with_prefix("CONTACTBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.contactbook.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "contactbook", "contactbook")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".contactbook.toml"))
    }

    /// The address book file: `--book` wins over `storage.path`.
    pub fn book_path(&self, global: &GlobalArgs) -> PathBuf {
        global
            .book
            .clone()
            .unwrap_or_else(|| self.storage.path.clone())
    }
}

fn file_source(
    path: &Path,
    required: bool,
) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path)
        .format(config::FileFormat::Toml)
        .required(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn global(book: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            book: book.map(PathBuf::from),
            today: None,
        }
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.storage.path, PathBuf::from("addressbook.json"));
        assert_eq!(cfg.birthdays.window_days, 7);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\npath = \"/tmp/people.json\"\n\n[birthdays]\nwindow_days = 14").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.storage.path, PathBuf::from("/tmp/people.json"));
        assert_eq!(cfg.birthdays.window_days, 14);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[birthdays]\nwindow_days = \"soon\"").unwrap();
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn book_flag_wins() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.book_path(&global(Some("x.json"))), PathBuf::from("x.json"));
        assert_eq!(cfg.book_path(&global(None)), PathBuf::from("addressbook.json"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
