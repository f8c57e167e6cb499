/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Library surface of Senlin-Client: classify error payloads
    from the Senlin clustering service into typed exceptions
    and render them for operators.

  Security / Safety Notes:
    No network I/O; payloads are inspected after receipt.

  Dependencies:
    See Cargo.toml.

  Operational Scope:
    Consumed by the senlin_client binary and by command
    handlers that wrap the clustering SDK.

  Revision History:
    2026-10-17 COD  Established library layout.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Small, explicit public surface
============================================================*/

pub mod config;
pub mod error;
pub mod exc;
pub mod i18n;
pub mod kind;
pub mod logger;
pub mod record;

pub use error::{Result, SenlinError};
pub use exc::{
    classify, parse_exception, Classification, HttpException, RawError, RenderMode,
    SdkHttpException,
};
pub use kind::{HttpErrorKind, SuperKind};
pub use record::ErrorRecord;
