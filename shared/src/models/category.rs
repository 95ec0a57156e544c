//! Category Models
//!
//! Master categories are the store-independent catalog. The per-store view of
//! that catalog adds an `asignada` column telling whether the store links it.

use serde::{Deserialize, Serialize};

/// Master category entity (`GET /superadmin/api/categorias-maestras`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterCategory {
    pub id: i64,
    pub nombre: String,
    /// Absolute icon URL, rewritten by the server
    pub icono_url: String,
}

impl MasterCategory {
    pub fn new(id: i64, nombre: impl Into<String>, icono_url: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            icono_url: icono_url.into(),
        }
    }
}

/// One row of `GET /superadmin/api/tiendas/{id}/categorias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssignment {
    pub id: i64,
    #[serde(default)]
    pub asignada: AssignedFlag,
}

impl CategoryAssignment {
    pub fn new(id: i64, asignada: impl Into<AssignedFlag>) -> Self {
        Self {
            id,
            asignada: asignada.into(),
        }
    }
}

/// Raw `asignada` value.
///
/// Depending on the database backend the column comes back as `1`, `true` or
/// `"1"`, so it is kept as an untyped JSON value and interpreted by the
/// editor. A missing column deserializes to `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignedFlag(pub serde_json::Value);

impl AssignedFlag {
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for AssignedFlag {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<i64> for AssignedFlag {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<bool> for AssignedFlag {
    fn from(value: bool) -> Self {
        Self(value.into())
    }
}

impl From<&str> for AssignedFlag {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}
