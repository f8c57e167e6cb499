/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Load operator configuration controlling error rendering
    and diagnostic log placement.

  Security / Safety Notes:
    Reads a single operator-owned TOML file; no secrets are
    stored here.

  Dependencies:
    serde + toml for parsing, dirs for platform paths.

  Operational Scope:
    Resolved once at startup; the render mode derived from it
    is threaded to every renderer.

  Revision History:
    2026-10-17 COD  Authored configuration loader.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Sensible defaults when no file exists
    - Explicit paths must exist
============================================================*/

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SenlinError};
use crate::exc::RenderMode;

const APP_DIR: &str = "senlin_client";

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SenlinConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Render remote errors with their traceback.
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Directory for session logs; platform state dir when unset.
    pub dir: Option<PathBuf>,
    /// Write a session log file at all.
    pub enabled: bool,
}

impl SenlinConfig {
    /// Load from `path` when given, else from the default location if present.
    pub fn load_from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(SenlinError::Config(format!(
                        "Configuration file {} does not exist",
                        explicit.display()
                    )));
                }
                Self::load(explicit)
            }
            None => match default_config_path() {
                Some(default) if default.exists() => Self::load(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            SenlinError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml(&raw)
            .map_err(|err| SenlinError::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Render mode, with `verbose_override` taking precedence when set.
    pub fn render_mode(&self, verbose_override: bool) -> RenderMode {
        RenderMode::from_verbose(verbose_override || self.output.verbose)
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.logging.dir {
            return dir.clone();
        }
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("logs")
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SenlinConfig::from_toml("").unwrap();
        assert!(!config.output.verbose);
        assert!(!config.logging.enabled);
        assert_eq!(config.render_mode(false), RenderMode::Normal);
    }

    #[test]
    fn verbose_flag_from_file_or_override() {
        let config = SenlinConfig::from_toml("[output]\nverbose = true\n").unwrap();
        assert_eq!(config.render_mode(false), RenderMode::Verbose);

        let config = SenlinConfig::default();
        assert_eq!(config.render_mode(true), RenderMode::Verbose);
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config =
            SenlinConfig::from_toml("[logging]\nenabled = true\ndir = \"/var/log/senlin\"\n")
                .unwrap();
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/senlin"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SenlinConfig::from_toml("[output]\ncolour = true\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = SenlinConfig::load_from_optional_path(Some(&missing)).unwrap_err();
        assert!(matches!(err, SenlinError::Config(_)));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nverbose = true\n").unwrap();
        let config = SenlinConfig::load_from_optional_path(Some(&path)).unwrap();
        assert!(config.output.verbose);
    }
}
