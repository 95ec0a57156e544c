//! Host UI collaborators
//!
//! The editor never draws anything itself. Everything visible goes through
//! [`EditorHost`]; optional widgets have no-op defaults so a host only
//! implements what it actually has.

use serde::{Deserialize, Serialize};

use super::session::EditSession;

/// Toast notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// UI surface the store editor drives
pub trait EditorHost {
    /// Show the blocking loading indicator
    fn show_loading(&mut self);

    /// Hide the loading indicator
    fn hide_loading(&mut self);

    /// Show a toast
    fn notify(&mut self, kind: ToastKind, title: &str, message: &str);

    /// Open the edit modal with a fully hydrated session
    fn reveal(&mut self, session: &EditSession);

    /// Logo preview widget. Receives the URL or an empty string.
    fn set_logo_preview(&mut self, _url: &str) {}

    /// Banner preview widget. Receives the URL or an empty string.
    fn set_banner_preview(&mut self, _url: &str) {}

    /// Category counter next to the grid
    fn update_category_count(&mut self) {}
}
