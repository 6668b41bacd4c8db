//! Domain models shared by the FOCO client and the HTTP surface.

mod bulk;
pub mod config;
mod sobject;

pub use bulk::{BulkCloseRequest, BulkJobRequest, BulkResultKind};
pub use config::{mask_secret, ConfigPatch, ConnectionConfig, GrantType, MaskedConfig};
pub use sobject::{UpdateOutcome, UpsertOutcome};
