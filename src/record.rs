/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::record
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Structured form of an error payload returned by the Senlin
    service, plus the normalisation that tolerates the payload
    shapes seen in the wild.

  Security / Safety Notes:
    Payloads are treated as untrusted data; nothing here panics
    on unexpected JSON shapes.

  Dependencies:
    serde / serde_json for payload representation.

  Operational Scope:
    Built once per classification and owned by the resulting
    HttpException.

  Revision History:
    2026-10-17 COD  Authored error record and normalisation.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Repair known malformations, report the rest
    - No silent data loss: unknown fields are retained
============================================================*/

use serde::Serialize;
use serde_json::{Map, Value};

use crate::i18n::translate;

/// Decoded `{"error": {...}}` payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ErrorRecord {
    pub error: ErrorBody,
}

/// Inner `error` object. `code` keeps whatever JSON value the service sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Structural field missing from a payload that could not be repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl ErrorRecord {
    pub fn new(code: Option<Value>, message: Option<String>, traceback: Option<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message,
                traceback,
                extra: Map::new(),
            },
        }
    }

    /// Record carrying only a message; used when the payload has no usable content.
    pub fn synthesized(message: &str) -> Self {
        Self::new(None, Some(message.to_string()), None)
    }

    /// Normalise a decoded payload into a record.
    ///
    /// Accepts the nested form and the legacy form where `code` sits at
    /// the top level. A nested body without `code` borrows the top-level one.
    pub fn normalize(payload: &Value) -> Result<Self, MissingField> {
        let root = payload.as_object().ok_or(MissingField("error"))?;
        match root.get("error") {
            Some(Value::Object(inner)) => {
                let mut body = ErrorBody::from_map(inner);
                if body.code.is_none() {
                    let code = root.get("code").ok_or(MissingField("code"))?;
                    body.code = Some(code.clone());
                }
                Ok(Self { error: body })
            }
            Some(_) => Err(MissingField("error")),
            None => {
                if !root.contains_key("code") {
                    return Err(MissingField("code"));
                }
                Ok(Self {
                    error: ErrorBody::from_map(root),
                })
            }
        }
    }

    /// Coerce an arbitrary value into a record without failing.
    ///
    /// Anything lacking an `error` object yields a record whose message is
    /// `fallback`, so the caller reports the failure kind instead of guessing.
    pub fn coerce(value: &Value, fallback: &str) -> Self {
        match value.get("error") {
            Some(Value::Object(inner)) => Self {
                error: ErrorBody::from_map(inner),
            },
            _ => Self::synthesized(fallback),
        }
    }

    /// Integer status code, if the record carries one.
    pub fn status(&self) -> Option<u64> {
        self.error.code.as_ref().and_then(Value::as_u64)
    }
}

impl ErrorBody {
    fn from_map(map: &Map<String, Value>) -> Self {
        let mut body = ErrorBody::default();
        for (key, value) in map {
            match key.as_str() {
                "code" => body.code = Some(value.clone()),
                "message" => body.message = text_of(value),
                "traceback" => body.traceback = text_of(value),
                _ => {
                    body.extra.insert(key.clone(), value.clone());
                }
            }
        }
        body
    }

    /// Message to render, defaulting to `Internal Error`.
    pub fn message_text(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| translate("Internal Error"))
    }

    /// Code to render, defaulting to `Unknown`.
    pub fn code_text(&self) -> String {
        match &self.code {
            Some(value) => text_of(value).unwrap_or_else(|| "null".to_string()),
            None => translate("Unknown").to_string(),
        }
    }

    pub fn traceback_text(&self) -> &str {
        self.traceback.as_deref().unwrap_or("")
    }
}

// Strings render bare, other values as their JSON text; null counts as absent.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
