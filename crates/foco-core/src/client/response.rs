//! Response classification shared by every operation.

use reqwest::Response;
use serde_json::Value;

use foco_types::{FocoError, Result};

pub(crate) fn transport(err: reqwest::Error) -> FocoError {
    FocoError::Transport { message: err.to_string() }
}

/// How an error body is reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorBody {
    /// Raw response text
    Raw,
    /// Parsed JSON where possible, raw text otherwise
    Structured,
}

/// Pass 2xx/3xx responses through, turn HTTP >= 400 into `UpstreamApi`.
pub(crate) async fn check(resp: Response, mode: ErrorBody) -> Result<Response> {
    let status = resp.status().as_u16();
    if status < 400 {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    tracing::debug!(status, "FOCO answered with an error status");
    Err(match mode {
        ErrorBody::Raw => FocoError::upstream_text(status, text),
        ErrorBody::Structured => FocoError::upstream_structured(status, &text),
    })
}

pub(crate) async fn json_body(resp: Response) -> Result<Value> {
    let bytes = resp.bytes().await.map_err(transport)?;
    serde_json::from_slice(&bytes).map_err(|e| FocoError::InvalidResponse {
        message: format!("Expected a JSON body: {}", e),
    })
}

/// Parsed JSON body, `None` when the body is empty or not JSON.
pub(crate) async fn optional_json(resp: Response) -> Result<Option<Value>> {
    let bytes = resp.bytes().await.map_err(transport)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(&bytes).ok())
}
