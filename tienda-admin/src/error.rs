//! Editor error types

use thiserror::Error;
use tienda_client::ClientError;

/// Remote resource fetched during hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Store,
    Assignments,
    MasterCategories,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Store => "store",
            Resource::Assignments => "assigned categories",
            Resource::MasterCategories => "master categories",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a hydration ended in the failed state
///
/// The resource is kept for logs only. The user always sees the same
/// load-failure toast.
#[derive(Debug, Error)]
pub enum HydrationError {
    #[error("Failed to load {resource}: {source}")]
    Load {
        resource: Resource,
        #[source]
        source: ClientError,
    },
}

impl HydrationError {
    pub fn load(resource: Resource, source: ClientError) -> Self {
        Self::Load { resource, source }
    }

    pub fn resource(&self) -> Resource {
        match self {
            HydrationError::Load { resource, .. } => *resource,
        }
    }
}

/// Result type for hydration steps
pub type HydrationResult<T> = Result<T, Vec<HydrationError>>;
