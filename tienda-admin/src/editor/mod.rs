//! Store profile editor
//!
//! Hydrates the store edit modal from the superadmin API and keeps the
//! category grid in sync with the selection.

pub mod form;
pub mod grid;
pub mod host;
pub mod hydrator;
pub mod selection;
pub mod session;
pub mod source;
pub mod truthiness;

pub use form::{ColorFields, PaymentGatewayFields, ProfileForm, SECRET_MASK};
pub use grid::{CategoryGrid, CategoryTile, GridRenderer, TileIcon};
pub use host::{EditorHost, ToastKind};
pub use hydrator::{HydrationState, ProfileEditor};
pub use selection::SelectionSet;
pub use session::EditSession;
pub use source::StoreDataSource;
