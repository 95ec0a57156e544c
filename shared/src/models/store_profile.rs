//! Store Profile Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store record as returned by `GET /superadmin/api/tiendas/{id}`
///
/// Only `id`, `nombre` and `subdominio` are required. Every other column is
/// nullable on the server and may be missing on older rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreProfile {
    pub id: i64,
    pub nombre: String,
    pub subdominio: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub horario: Option<String>,
    pub slogan: Option<String>,
    pub logo: Option<String>,
    pub banner_url: Option<String>,
    pub color_primario: Option<String>,
    pub color_secundario: Option<String>,
    pub color_terciario: Option<String>,
    /// Serialized from a SQL DECIMAL as a JSON float
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub costo_domicilio: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub pedido_minimo: Option<Decimal>,
    pub modo_pedido: Option<String>,
    #[serde(flatten)]
    pub pago: PaymentGatewayConfig,
}

/// Wompi payment gateway columns of a store row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentGatewayConfig {
    /// TINYINT on the server; may come back as 0/1, bool or string
    #[serde(default)]
    pub wompi_activo: serde_json::Value,
    pub wompi_public_key: Option<String>,
    pub wompi_private_key: Option<String>,
    pub wompi_evento_key: Option<String>,
    pub wompi_integrity_key: Option<String>,
}

/// How customers place orders in the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderMode {
    /// Customers build a cart and check out themselves
    #[default]
    Normal,
    /// Orders are taken by a waiter; the storefront hides the cart
    #[serde(rename = "mesero")]
    Waiter,
}

impl OrderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Normal => "normal",
            OrderMode::Waiter => "mesero",
        }
    }

    /// Parse the raw column value. Unknown or empty values map to `Normal`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("mesero") => OrderMode::Waiter,
            _ => OrderMode::Normal,
        }
    }
}

impl std::fmt::Display for OrderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
