//! Bulk API 2.0 ingest payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CLOSE_STATE: &str = "UploadComplete";

fn default_content_type() -> Option<String> {
    Some("CSV".to_string())
}

fn default_line_ending() -> Option<String> {
    Some("LF".to_string())
}

/// Job descriptor accepted by `POST /api/bulk/job` and forwarded to
/// `jobs/ingest`. `contentType` and `lineEnding` default to `CSV` / `LF`
/// when omitted; an explicit `null` drops the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BulkJobRequest {
    /// sObject API name, e.g. `Account`
    pub object: String,
    /// `insert`, `update`, `upsert`, `delete` or `hardDelete`
    pub operation: String,
    #[serde(default = "default_content_type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default = "default_line_ending", skip_serializing_if = "Option::is_none")]
    pub line_ending: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id_field_name: Option<String>,
}

/// Body of `PATCH /api/bulk/job/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkCloseRequest {
    #[serde(default)]
    pub state: Option<String>,
}

impl BulkCloseRequest {
    /// Target state, `UploadComplete` unless given.
    pub fn target_state(&self) -> &str {
        match self.state.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_CLOSE_STATE,
        }
    }
}

/// Result sets exposed by an ingest job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BulkResultKind {
    #[serde(rename = "successfulResults")]
    Successful,
    #[serde(rename = "failedResults")]
    Failed,
    #[serde(rename = "unprocessedrecords")]
    Unprocessed,
}

impl BulkResultKind {
    /// Path segment under `jobs/ingest/{id}/`.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Successful => "successfulResults",
            Self::Failed => "failedResults",
            Self::Unprocessed => "unprocessedrecords",
        }
    }
}

impl fmt::Display for BulkResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
