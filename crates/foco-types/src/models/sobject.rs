//! Results of sObject write operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a PATCH on an existing record. FOCO answers with an empty body,
/// so only the status is echoed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub success: bool,
    pub status: u16,
}

/// Result of an upsert by external id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpsertOutcome {
    pub success: bool,
    /// `true` only when FOCO answered 201 Created
    pub created: bool,
    pub status: u16,
    /// Parsed response body, `null` when empty or not JSON
    pub body: Option<Value>,
}

impl UpsertOutcome {
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        Self { success: true, created: status == 201, status, body }
    }
}
