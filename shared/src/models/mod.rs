//! Data models
//!
//! Shapes of the superadmin API payloads consumed by the store editor.
//! Field names follow the server's column names. All IDs are `i64`.

pub mod category;
pub mod store_profile;

// Re-exports
pub use category::*;
pub use store_profile::*;
