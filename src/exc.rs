/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::exc
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Translate error payloads received from the Senlin service
    into typed HttpException values and render them for
    operators in normal or verbose form.

  Security / Safety Notes:
    Performs no network I/O; only inspects payloads already
    received. Tracebacks are shown in verbose mode only.

  Dependencies:
    serde_json for payload decoding.

  Operational Scope:
    Called by command handlers whenever the SDK reports a
    remote failure.

  Revision History:
    2026-10-17 COD  Authored classifier and HTTP exception type.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit input shapes instead of runtime probing
    - Rendering configuration threaded, never global
    - Malformed input reported, never swallowed silently
============================================================*/

use std::fmt;

use serde_json::Value;

use crate::error::{Result, SenlinError};
use crate::i18n::translate;
use crate::kind::{HttpErrorKind, SuperKind};
use crate::logger::Logger;
use crate::record::{ErrorRecord, MissingField};

/// How an HttpException is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// `ERROR(<code>): <message>`
    #[default]
    Normal,
    /// `ERROR: <message>\n<traceback>`
    Verbose,
}

impl RenderMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            RenderMode::Verbose
        } else {
            RenderMode::Normal
        }
    }
}

/// Remote-service error bound to a typed kind.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    kind: HttpErrorKind,
    record: ErrorRecord,
}

impl HttpException {
    pub fn new(kind: HttpErrorKind, record: ErrorRecord) -> Self {
        Self { kind, record }
    }

    /// Build from an arbitrary JSON value, substituting the kind's
    /// documentation as message when the value is not a proper record.
    pub fn from_value(kind: HttpErrorKind, value: &Value) -> Self {
        Self::new(kind, ErrorRecord::coerce(value, kind.documentation()))
    }

    /// Bind a normalised record to the kind its status code selects.
    pub fn from_record(record: ErrorRecord) -> Self {
        let kind = record
            .status()
            .and_then(HttpErrorKind::from_code)
            .unwrap_or(HttpErrorKind::Generic);
        Self::new(kind, record)
    }

    pub fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    pub fn record(&self) -> &ErrorRecord {
        &self.record
    }

    pub fn into_record(self) -> ErrorRecord {
        self.record
    }

    /// Advisory class-level code (`N/A` for unknown statuses).
    pub fn code(&self) -> String {
        self.kind.code_label()
    }

    pub fn documentation(&self) -> &'static str {
        self.kind.documentation()
    }

    pub fn super_kind(&self) -> Option<SuperKind> {
        self.kind.super_kind()
    }

    pub fn is_client_error(&self) -> bool {
        self.super_kind() == Some(SuperKind::Client)
    }

    pub fn is_server_error(&self) -> bool {
        self.super_kind() == Some(SuperKind::Server)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == HttpErrorKind::NotFound
    }

    /// Render using the record's own code, message and traceback.
    pub fn render(&self, mode: RenderMode) -> String {
        let body = &self.record.error;
        match mode {
            RenderMode::Verbose => format!(
                "{}: {}\n{}",
                translate("ERROR"),
                body.message_text(),
                body.traceback_text()
            ),
            RenderMode::Normal => format!(
                "{}({}): {}",
                translate("ERROR"),
                body.code_text(),
                body.message_text()
            ),
        }
    }

    /// Display adapter for the given mode.
    pub fn display(&self, mode: RenderMode) -> Rendered<'_> {
        Rendered { exc: self, mode }
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::Normal))
    }
}

impl std::error::Error for HttpException {}

/// Borrowed HttpException paired with a render mode.
pub struct Rendered<'a> {
    exc: &'a HttpException,
    mode: RenderMode,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exc.render(self.mode))
    }
}

/// HTTP failure as reported by the clustering SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkHttpException {
    pub status_code: Option<u16>,
    /// JSON-encoded response body.
    pub details: String,
}

impl SdkHttpException {
    pub fn new(status_code: Option<u16>, details: impl Into<String>) -> Self {
        Self {
            status_code,
            details: details.into(),
        }
    }
}

impl fmt::Display for SdkHttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "HttpException {code}: {}", self.details),
            None => write!(f, "HttpException: {}", self.details),
        }
    }
}

impl std::error::Error for SdkHttpException {}

/// Input accepted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawError {
    /// JSON `details` carried by an SDK exception.
    Details(String),
    /// Raw JSON text.
    Text(String),
    /// Any other value, described for diagnostics.
    Opaque(String),
}

impl RawError {
    pub fn opaque<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        RawError::Opaque(format!("{value:?}"))
    }
}

impl From<SdkHttpException> for RawError {
    fn from(exc: SdkHttpException) -> Self {
        RawError::Details(exc.details)
    }
}

impl From<&SdkHttpException> for RawError {
    fn from(exc: &SdkHttpException) -> Self {
        RawError::Details(exc.details.clone())
    }
}

impl From<String> for RawError {
    fn from(text: String) -> Self {
        RawError::Text(text)
    }
}

impl From<&str> for RawError {
    fn from(text: &str) -> Self {
        RawError::Text(text.to_string())
    }
}

/// Outcome of classifying a raw error.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Typed exception to raise.
    Raised(HttpException),
    /// Input shape not understood; carries its description.
    Unrecognized(String),
    /// Payload lacked a structural field and could not be repaired.
    Malformed { field: &'static str, record: Value },
}

/// Classify without side effects. Invalid JSON is returned as an error.
pub fn classify(input: RawError) -> std::result::Result<Classification, serde_json::Error> {
    let text = match input {
        RawError::Details(text) | RawError::Text(text) => text,
        RawError::Opaque(description) => return Ok(Classification::Unrecognized(description)),
    };
    let payload: Value = serde_json::from_str(&text)?;
    match ErrorRecord::normalize(&payload) {
        Ok(record) => Ok(Classification::Raised(HttpException::from_record(record))),
        Err(MissingField(field)) => Ok(Classification::Malformed {
            field,
            record: payload,
        }),
    }
}

/// Classify `input` and raise the typed exception through `Err`.
///
/// Unrecognized or unrepairable input is logged and yields `Ok(())`;
/// undecodable JSON yields `SenlinError::Serialization`.
pub fn parse_exception(input: impl Into<RawError>, logger: &Logger) -> Result<()> {
    let outcome = classify(input.into()).map_err(|err| {
        SenlinError::Serialization(format!("Failed to decode error payload: {err}"))
    })?;
    match outcome {
        Classification::Raised(exc) => {
            logger.debug(
                "EXC",
                format!("Classified remote error as {} ({})", exc.kind(), exc.code()),
            );
            Err(SenlinError::Http(exc))
        }
        Classification::Unrecognized(description) => {
            logger.warn(
                "EXC-UNKNOWN",
                format!("{}: {description}", translate("Unknown exception")),
            );
            Ok(())
        }
        Classification::Malformed { field, record } => {
            logger.warn(
                "EXC-MALFORMED",
                format!(
                    "{} \"{field}\"",
                    translate("Malformed exception record, missing field")
                ),
            );
            logger.warn(
                "EXC-MALFORMED",
                format!("{}: {record}", translate("Original error record")),
            );
            Ok(())
        }
    }
}
