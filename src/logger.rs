/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::logger
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Provide structured, append-only diagnostics for the error
    classifier and the command entry point.

  Security / Safety Notes:
    Remote tracebacks are never logged; only the rendered
    error line and raw records of malformed payloads are.

  Dependencies:
    chrono for UTC stamps, sha2 for session log digests.

  Operational Scope:
    Shared by the classifier (soft-failure diagnostics) and
    main (session lifecycle events).

  Revision History:
    2026-10-17 COD  Adapted logging module for Senlin-Client.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Append-only logging with UTC timestamps
    - Warnings always reach stderr
    - Graceful error propagation on I/O failures
============================================================*/

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::error::{Result, SenlinError};

/// Structured log level for Senlin-Client events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn always_echoed(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

/// Logger writing to stderr and, optionally, an append-only file.
pub struct Logger {
    file: Option<Mutex<BufWriter<File>>>,
    path: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    /// Build a logger; `path` enables the file sink.
    pub fn new(path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let file = match path.as_deref() {
            Some(file_path) => Some(Mutex::new(BufWriter::new(open_log(file_path)?))),
            None => None,
        };

        Ok(Self {
            file,
            path,
            verbose,
        })
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Emit a log entry with the given level, code, and message.
    pub fn log<S: AsRef<str>>(&self, level: LogLevel, code: &str, message: S) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let payload = format!(
            "{timestamp} [{}] [{}] {}",
            level.as_str(),
            code,
            message.as_ref()
        );

        if self.verbose || level.always_echoed() {
            eprintln!("{payload}");
        }

        let Some(file) = &self.file else {
            return;
        };
        if let Ok(mut guard) = file.lock() {
            if writeln!(guard, "{payload}").and_then(|_| guard.flush()).is_err() {
                eprintln!(
                    "{timestamp} [{}] [LOGGER] Failed to write to log file",
                    LogLevel::Error.as_str()
                );
            }
        }
    }

    pub fn info<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Info, code, message);
    }

    pub fn warn<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Warn, code, message);
    }

    pub fn error<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Error, code, message);
    }

    pub fn debug<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Debug, code, message);
    }

    /// Return the path backing this logger, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the SHA-256 digest of the session log next to it as `<log>.hash`.
    pub fn finalize(&self) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        let data = std::fs::read(path).map_err(|err| {
            SenlinError::Filesystem(format!(
                "Failed to read log for hashing {}: {err}",
                path.display()
            ))
        })?;
        let digest = Sha256::digest(&data);
        let hash_path = hash_path_for(path);
        let line = format!(
            "{:x}  {}\n",
            digest,
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        std::fs::write(&hash_path, line).map_err(|err| {
            SenlinError::Filesystem(format!(
                "Failed to write hash file {}: {err}",
                hash_path.display()
            ))
        })
    }
}

fn open_log(file_path: &Path) -> Result<File> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            SenlinError::Filesystem(format!(
                "Failed to create log directory {}: {err}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(|err| {
            SenlinError::Filesystem(format!(
                "Failed to open log file {}: {err}",
                file_path.display()
            ))
        })
}

fn hash_path_for(path: &Path) -> PathBuf {
    let mut hash_os = path.as_os_str().to_os_string();
    hash_os.push(".hash");
    PathBuf::from(hash_os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_records_every_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("session.log");
        let logger = Logger::new(Some(path.clone()), false).unwrap();
        logger.debug("EXC", "classified");
        logger.warn("EXC-UNKNOWN", "Unknown exception: 42");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[DEBUG] [EXC] classified"));
        assert!(contents.contains("[WARN] [EXC-UNKNOWN] Unknown exception: 42"));
    }

    #[test]
    fn finalize_writes_digest_alongside_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let logger = Logger::new(Some(path.clone()), false).unwrap();
        logger.info("INIT", "start");
        logger.finalize().unwrap();

        let hash = std::fs::read_to_string(dir.path().join("session.log.hash")).unwrap();
        let (digest, name) = hash.trim_end().split_once("  ").unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(name, "session.log");
    }

    #[test]
    fn finalize_without_file_is_a_no_op() {
        let logger = Logger::new(None, true).unwrap();
        assert!(logger.is_verbose());
        assert!(logger.finalize().is_ok());
    }
}
