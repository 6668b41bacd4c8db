//! Connection configuration models.

mod connection;
mod enums;
mod mask;
mod patch;

pub use connection::{
    normalize_url, ConnectionConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_LOGIN_URL,
};
pub use enums::GrantType;
pub use mask::{mask_secret, MaskedConfig};
pub use patch::ConfigPatch;
