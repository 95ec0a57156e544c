//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorBody;
use shared::models::{CategoryAssignment, MasterCategory, StoreProfile};

/// HTTP client for the superadmin API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        tracing::debug!(url = %url, "GET");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_for_status(status, &text));
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Store API ==========

    /// Fetch a store row by id
    pub async fn get_store(&self, store_id: i64) -> ClientResult<StoreProfile> {
        self.get(&format!("/superadmin/api/tiendas/{}", store_id)).await
    }

    /// Fetch the master catalog annotated with the store's assignment flags
    pub async fn get_store_categories(&self, store_id: i64) -> ClientResult<Vec<CategoryAssignment>> {
        self.get(&format!("/superadmin/api/tiendas/{}/categorias", store_id))
            .await
    }

    // ========== Catalog API ==========

    /// Fetch all active master categories in catalog order
    pub async fn get_master_categories(&self) -> ClientResult<Vec<MasterCategory>> {
        self.get("/superadmin/api/categorias-maestras").await
    }
}

/// Map a non-success status and its body to a client error
fn error_for_status(status: StatusCode, text: &str) -> ClientError {
    let message = ErrorBody::message_from(text);
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Internal(message),
    }
}
