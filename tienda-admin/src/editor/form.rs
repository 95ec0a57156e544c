//! Store edit form
//!
//! Flattens a [`StoreProfile`] into the values shown by the edit modal,
//! applying the display fallbacks and the secret masking rule.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{OrderMode, PaymentGatewayConfig, StoreProfile};

use super::truthiness;

/// Placeholder shown instead of a stored secret
pub const SECRET_MASK: &str = "********";
/// Title of the edit modal
pub const MODAL_TITLE: &str = "Editar Tienda";

pub const DEFAULT_PRIMARY_COLOR: &str = "#ff441f";
pub const DEFAULT_SECONDARY_COLOR: &str = "#00b14f";
pub const DEFAULT_TERTIARY_COLOR: &str = "#f5f5f5";

/// Brand colors; each value feeds both the picker and its text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFields {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl Default for ColorFields {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            tertiary: DEFAULT_TERTIARY_COLOR.to_string(),
        }
    }
}

/// Wompi section of the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentGatewayFields {
    pub active: bool,
    /// The credentials panel is only expanded for active gateways
    pub credentials_visible: bool,
    pub public_key: String,
    pub private_key: String,
    pub event_key: String,
    pub integrity_key: String,
}

impl PaymentGatewayFields {
    pub fn from_config(config: &PaymentGatewayConfig) -> Self {
        let active = truthiness::is_one(&config.wompi_activo);
        Self {
            active,
            credentials_visible: active,
            public_key: text_or_empty(config.wompi_public_key.as_deref()),
            private_key: mask_secret(config.wompi_private_key.as_deref()),
            event_key: mask_secret(config.wompi_evento_key.as_deref()),
            integrity_key: mask_secret(config.wompi_integrity_key.as_deref()),
        }
    }
}

/// Every scalar field of the edit modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub title: String,
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
    pub slogan: String,
    pub logo_url: String,
    pub banner_url: String,
    pub colors: ColorFields,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    pub order_mode: OrderMode,
    pub payment: PaymentGatewayFields,
}

impl ProfileForm {
    pub fn from_profile(profile: &StoreProfile) -> Self {
        Self {
            title: MODAL_TITLE.to_string(),
            id: profile.id,
            name: profile.nombre.clone(),
            subdomain: profile.subdominio.clone(),
            email: text_or_empty(profile.email.as_deref()),
            phone: text_or_empty(profile.telefono.as_deref()),
            address: text_or_empty(profile.direccion.as_deref()),
            hours: text_or_empty(profile.horario.as_deref()),
            slogan: text_or_empty(profile.slogan.as_deref()),
            logo_url: text_or_empty(profile.logo.as_deref()),
            banner_url: text_or_empty(profile.banner_url.as_deref()),
            colors: ColorFields {
                primary: text_or(profile.color_primario.as_deref(), DEFAULT_PRIMARY_COLOR),
                secondary: text_or(profile.color_secundario.as_deref(), DEFAULT_SECONDARY_COLOR),
                tertiary: text_or(profile.color_terciario.as_deref(), DEFAULT_TERTIARY_COLOR),
            },
            delivery_fee: profile.costo_domicilio.unwrap_or(Decimal::ZERO),
            minimum_order: profile.pedido_minimo.unwrap_or(Decimal::ZERO),
            order_mode: OrderMode::from_wire(profile.modo_pedido.as_deref()),
            payment: PaymentGatewayFields::from_config(&profile.pago),
        }
    }
}

/// Mask a stored secret: present ⇒ [`SECRET_MASK`], absent or empty ⇒ `""`
pub fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if !s.is_empty() => SECRET_MASK.to_string(),
        _ => String::new(),
    }
}

/// Whether a submitted secret value is the untouched mask
pub fn is_masked(value: &str) -> bool {
    value == SECRET_MASK
}

fn text_or_empty(value: Option<&str>) -> String {
    text_or(value, "")
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
