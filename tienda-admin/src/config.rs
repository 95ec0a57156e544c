use tienda_client::ClientConfig;

use crate::editor::GridRenderer;

/// Icon shown when a category icon fails to load (served by the admin app)
pub const DEFAULT_FALLBACK_ICON_URL: &str = "/static/img/categoria-default.png";

/// Admin tool configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TIENDA_BASE_URL | http://localhost:5000 | Superadmin server |
/// | TIENDA_TOKEN | (none) | Bearer token |
/// | TIENDA_REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | TIENDA_FALLBACK_ICON_URL | /static/img/categoria-default.png | Category icon fallback |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (none) | Daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// TIENDA_BASE_URL=https://admin.example.com LOG_LEVEL=debug cargo run -- 12
/// ```
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout_secs: u64,
    pub fallback_icon_url: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl AdminConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for each variable; unset or unparsable values use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("TIENDA_BASE_URL").unwrap_or_else(|| "http://localhost:5000".into()),
            token: non_empty("TIENDA_TOKEN"),
            request_timeout_secs: lookup("TIENDA_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(30),
            fallback_icon_url: non_empty("TIENDA_FALLBACK_ICON_URL")
                .unwrap_or_else(|| DEFAULT_FALLBACK_ICON_URL.into()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.base_url).with_timeout(self.request_timeout_secs);
        match &self.token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }

    pub fn grid_renderer(&self) -> GridRenderer {
        GridRenderer::new(&self.fallback_icon_url)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
