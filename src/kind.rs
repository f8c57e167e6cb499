/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::kind
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Closed set of HTTP error kinds surfaced by the Senlin
    service, their status bindings, and their fallback text.

  Security / Safety Notes:
    Static data only; no I/O performed in this module.

  Dependencies:
    serde for serializing kinds into machine-readable output.

  Operational Scope:
    Consulted by the classifier to bind a status code to a
    kind and by callers matching on specific failures.

  Revision History:
    2026-10-17 COD  Established status code table.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Exhaustive, compile-time checked status table
    - Stable names for programmatic matching
============================================================*/

use std::fmt;

use serde::Serialize;

/// Family a concrete HTTP kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuperKind {
    /// 4xx responses.
    Client,
    /// 5xx responses.
    Server,
}

/// Typed HTTP error kind.
///
/// `Generic` stands for a status the table does not know; every other
/// variant is bound to exactly one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpErrorKind {
    Generic,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    RequestEntityTooLarge,
    RequestUriTooLong,
    UnsupportedMediaType,
    RequestRangeNotSatisfiable,
    ExpectationFailed,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
}

impl HttpErrorKind {
    /// Every kind bound to a status code, in ascending code order.
    pub const KNOWN: [HttpErrorKind; 23] = [
        HttpErrorKind::BadRequest,
        HttpErrorKind::Unauthorized,
        HttpErrorKind::Forbidden,
        HttpErrorKind::NotFound,
        HttpErrorKind::MethodNotAllowed,
        HttpErrorKind::NotAcceptable,
        HttpErrorKind::ProxyAuthenticationRequired,
        HttpErrorKind::RequestTimeout,
        HttpErrorKind::Conflict,
        HttpErrorKind::Gone,
        HttpErrorKind::LengthRequired,
        HttpErrorKind::PreconditionFailed,
        HttpErrorKind::RequestEntityTooLarge,
        HttpErrorKind::RequestUriTooLong,
        HttpErrorKind::UnsupportedMediaType,
        HttpErrorKind::RequestRangeNotSatisfiable,
        HttpErrorKind::ExpectationFailed,
        HttpErrorKind::InternalServerError,
        HttpErrorKind::NotImplemented,
        HttpErrorKind::BadGateway,
        HttpErrorKind::ServiceUnavailable,
        HttpErrorKind::GatewayTimeout,
        HttpErrorKind::HttpVersionNotSupported,
    ];

    /// Resolve a status code to its kind; `None` on a table miss.
    pub fn from_code(code: u64) -> Option<Self> {
        let kind = match code {
            400 => HttpErrorKind::BadRequest,
            401 => HttpErrorKind::Unauthorized,
            403 => HttpErrorKind::Forbidden,
            404 => HttpErrorKind::NotFound,
            405 => HttpErrorKind::MethodNotAllowed,
            406 => HttpErrorKind::NotAcceptable,
            407 => HttpErrorKind::ProxyAuthenticationRequired,
            408 => HttpErrorKind::RequestTimeout,
            409 => HttpErrorKind::Conflict,
            410 => HttpErrorKind::Gone,
            411 => HttpErrorKind::LengthRequired,
            412 => HttpErrorKind::PreconditionFailed,
            413 => HttpErrorKind::RequestEntityTooLarge,
            414 => HttpErrorKind::RequestUriTooLong,
            415 => HttpErrorKind::UnsupportedMediaType,
            416 => HttpErrorKind::RequestRangeNotSatisfiable,
            417 => HttpErrorKind::ExpectationFailed,
            500 => HttpErrorKind::InternalServerError,
            501 => HttpErrorKind::NotImplemented,
            502 => HttpErrorKind::BadGateway,
            503 => HttpErrorKind::ServiceUnavailable,
            504 => HttpErrorKind::GatewayTimeout,
            505 => HttpErrorKind::HttpVersionNotSupported,
            _ => return None,
        };
        Some(kind)
    }

    /// Status code the kind is bound to. `Generic` has none.
    pub fn code(self) -> Option<u16> {
        let code = match self {
            HttpErrorKind::Generic => return None,
            HttpErrorKind::BadRequest => 400,
            HttpErrorKind::Unauthorized => 401,
            HttpErrorKind::Forbidden => 403,
            HttpErrorKind::NotFound => 404,
            HttpErrorKind::MethodNotAllowed => 405,
            HttpErrorKind::NotAcceptable => 406,
            HttpErrorKind::ProxyAuthenticationRequired => 407,
            HttpErrorKind::RequestTimeout => 408,
            HttpErrorKind::Conflict => 409,
            HttpErrorKind::Gone => 410,
            HttpErrorKind::LengthRequired => 411,
            HttpErrorKind::PreconditionFailed => 412,
            HttpErrorKind::RequestEntityTooLarge => 413,
            HttpErrorKind::RequestUriTooLong => 414,
            HttpErrorKind::UnsupportedMediaType => 415,
            HttpErrorKind::RequestRangeNotSatisfiable => 416,
            HttpErrorKind::ExpectationFailed => 417,
            HttpErrorKind::InternalServerError => 500,
            HttpErrorKind::NotImplemented => 501,
            HttpErrorKind::BadGateway => 502,
            HttpErrorKind::ServiceUnavailable => 503,
            HttpErrorKind::GatewayTimeout => 504,
            HttpErrorKind::HttpVersionNotSupported => 505,
        };
        Some(code)
    }

    /// Advisory code label: the bound status, or `N/A` for `Generic`.
    ///
    /// Rendering never uses this; the record's own code is shown.
    pub fn code_label(self) -> String {
        match self.code() {
            Some(code) => code.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn super_kind(self) -> Option<SuperKind> {
        match self.code() {
            Some(400..=499) => Some(SuperKind::Client),
            Some(500..=599) => Some(SuperKind::Server),
            _ => None,
        }
    }

    /// Fixed text used when a record carries no usable message.
    pub fn documentation(self) -> &'static str {
        match self {
            HttpErrorKind::Generic => "Base exception for all HTTP-derived exceptions.",
            HttpErrorKind::BadRequest => "Bad request.",
            HttpErrorKind::Unauthorized => "Unauthorized.",
            HttpErrorKind::Forbidden => "Forbidden.",
            HttpErrorKind::NotFound => "Not found.",
            HttpErrorKind::MethodNotAllowed => "Method not allowed.",
            HttpErrorKind::NotAcceptable => "Not acceptable.",
            HttpErrorKind::ProxyAuthenticationRequired => "Proxy authentication required.",
            HttpErrorKind::RequestTimeout => "Request timeout.",
            HttpErrorKind::Conflict => "Conflict.",
            HttpErrorKind::Gone => "Gone.",
            HttpErrorKind::LengthRequired => "Length required.",
            HttpErrorKind::PreconditionFailed => "Precondition failed.",
            HttpErrorKind::RequestEntityTooLarge => "Request entity too large.",
            HttpErrorKind::RequestUriTooLong => "Request URI too long.",
            HttpErrorKind::UnsupportedMediaType => "Unsupported media type.",
            HttpErrorKind::RequestRangeNotSatisfiable => "Requested range not satisfiable.",
            HttpErrorKind::ExpectationFailed => "Expectation failed.",
            HttpErrorKind::InternalServerError => "Internal server error.",
            HttpErrorKind::NotImplemented => "Not implemented.",
            HttpErrorKind::BadGateway => "Bad gateway.",
            HttpErrorKind::ServiceUnavailable => "Service unavailable.",
            HttpErrorKind::GatewayTimeout => "Gateway timeout.",
            HttpErrorKind::HttpVersionNotSupported => "HTTP version not supported.",
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
