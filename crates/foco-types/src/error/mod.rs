//! Typed error definitions for the FOCO gateway.
//!
//! All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod gateway;

pub use gateway::FocoError;

/// Standard Result type using FocoError.
pub type Result<T> = std::result::Result<T, FocoError>;
