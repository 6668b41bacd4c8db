//! # FOCO Types
//!
//! Core types, models, and error definitions for the FOCO gateway.
//!
//! - **`error`** - Typed error hierarchy for upstream, transport and client failures
//! - **`models`** - Connection configuration, masking, sObject and Bulk API payloads
//!
//! ## Architecture Role
//!
//! `foco-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        foco-types (this crate)
//!              │
//!              ▼
//!          foco-core
//!              │
//!              ▼
//!         foco-server
//! ```
//!
//! Nothing in here performs I/O, so every type can be exercised from plain
//! unit tests.

pub mod error;
pub mod models;

pub use error::{FocoError, Result};

pub use models::{
    BulkCloseRequest, BulkJobRequest, BulkResultKind, ConfigPatch, ConnectionConfig, GrantType,
    MaskedConfig, UpdateOutcome, UpsertOutcome,
};
