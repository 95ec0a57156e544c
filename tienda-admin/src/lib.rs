//! Tienda Admin - store profile editor core
//!
//! Loads a store, its assigned categories and the master catalog, and turns
//! them into one edit session driven through an [`editor::EditorHost`].

pub mod config;
pub mod editor;
pub mod error;
pub mod logger;

pub use config::AdminConfig;
pub use editor::{EditSession, EditorHost, HydrationState, ProfileEditor, SelectionSet, StoreDataSource, ToastKind};
pub use error::{HydrationError, Resource};
