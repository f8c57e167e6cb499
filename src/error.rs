/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise Senlin-Client error types so command handlers
    can branch on failure kind, render a uniform `ERROR` line,
    and exit with a stable code.

  Security / Safety Notes:
    Remote tracebacks are only rendered in verbose mode.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Used across modules to propagate recoverable failures and
    consolidate exit codes for the binary entry point.

  Revision History:
    2026-10-17 COD  Established shared error definitions.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::io;
use std::process::ExitCode;

use thiserror::Error;

use crate::exc::{HttpException, RenderMode};
use crate::kind::SuperKind;

const COMMAND_DOC: &str = "Invalid usage of CLI.";
const FILE_FORMAT_DOC: &str = "Illegal file format detected.";

/// Result alias for Senlin-Client operations.
pub type Result<T> = std::result::Result<T, SenlinError>;

/// Enumerates high-level error domains surfaced by Senlin-Client.
#[derive(Debug, Error)]
pub enum SenlinError {
    #[error("{}", .0.as_deref().unwrap_or(COMMAND_DOC))]
    Command(Option<String>),
    #[error("{}", .0.as_deref().unwrap_or(FILE_FORMAT_DOC))]
    FileFormat(Option<String>),
    #[error(transparent)]
    Http(HttpException),
    #[error("Configuration: {0}")]
    Config(String),
    #[error("Serialization: {0}")]
    Serialization(String),
    #[error("Filesystem: {0}")]
    Filesystem(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SenlinError {
    pub fn command<S: Into<String>>(message: S) -> Self {
        SenlinError::Command(Some(message.into()))
    }

    pub fn file_format<S: Into<String>>(message: S) -> Self {
        SenlinError::FileFormat(Some(message.into()))
    }

    /// Usage error raised when a named resource does not exist.
    pub fn resource_not_found(resource: &str, name: &str) -> Self {
        SenlinError::command(format!("{resource} not found: {name}"))
    }

    /// Render for display; only HTTP errors vary with the mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match self {
            SenlinError::Http(exc) => exc.render(mode),
            other => other.to_string(),
        }
    }

    pub fn as_http(&self) -> Option<&HttpException> {
        match self {
            SenlinError::Http(exc) => Some(exc),
            _ => None,
        }
    }

    /// Numeric exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            SenlinError::Command(_) => 2,
            SenlinError::FileFormat(_) => 3,
            SenlinError::Http(exc) => match exc.super_kind() {
                Some(SuperKind::Client) => 10,
                Some(SuperKind::Server) => 11,
                None => 12,
            },
            SenlinError::Config(_) => 20,
            SenlinError::Serialization(_) => 31,
            SenlinError::Filesystem(_) => 40,
            SenlinError::Io(_) => 41,
        }
    }

    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<HttpException> for SenlinError {
    fn from(exc: HttpException) -> Self {
        SenlinError::Http(exc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::HttpErrorKind;
    use crate::record::ErrorRecord;
    use serde_json::json;

    #[test]
    fn plain_errors_fall_back_to_documentation() {
        assert_eq!(SenlinError::Command(None).to_string(), "Invalid usage of CLI.");
        assert_eq!(
            SenlinError::FileFormat(None).to_string(),
            "Illegal file format detected."
        );
        assert_eq!(SenlinError::command("bad --limit").to_string(), "bad --limit");
    }

    #[test]
    fn resource_not_found_is_a_usage_error() {
        let err = SenlinError::resource_not_found("Action", "a1b2");
        assert!(matches!(err, SenlinError::Command(_)));
        assert_eq!(err.to_string(), "Action not found: a1b2");
    }

    #[test]
    fn http_errors_render_per_mode() {
        let record = ErrorRecord::new(Some(json!(500)), Some("boom".into()), Some("tb".into()));
        let err = SenlinError::from(HttpException::new(
            HttpErrorKind::InternalServerError,
            record,
        ));
        assert_eq!(err.to_string(), "ERROR(500): boom");
        assert_eq!(err.render(RenderMode::Normal), "ERROR(500): boom");
        assert_eq!(err.render(RenderMode::Verbose), "ERROR: boom\ntb");
        assert!(err.as_http().is_some());
    }

    #[test]
    fn exit_codes_separate_client_server_and_generic() {
        let client = SenlinError::Http(HttpException::new(
            HttpErrorKind::NotFound,
            ErrorRecord::default(),
        ));
        let server = SenlinError::Http(HttpException::new(
            HttpErrorKind::GatewayTimeout,
            ErrorRecord::default(),
        ));
        let generic = SenlinError::Http(HttpException::new(
            HttpErrorKind::Generic,
            ErrorRecord::default(),
        ));
        assert_eq!(client.exit_status(), 10);
        assert_eq!(server.exit_status(), 11);
        assert_eq!(generic.exit_status(), 12);
        assert_eq!(SenlinError::Command(None).exit_status(), 2);
        assert_eq!(SenlinError::file_format("x").exit_status(), 3);
    }
}
