//! Tienda Client - HTTP client for the superadmin API
//!
//! Provides network-based HTTP calls to the store administration endpoints.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{CategoryAssignment, MasterCategory, StoreProfile};
