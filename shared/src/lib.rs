//! Shared types for the Tienda admin tools
//!
//! Wire models of the superadmin API and the common response types used by
//! both the HTTP client and the store editor.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{AssignedFlag, CategoryAssignment, MasterCategory, OrderMode, PaymentGatewayConfig, StoreProfile};
pub use response::ErrorBody;
