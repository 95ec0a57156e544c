//! Remote data the editor hydrates from

use async_trait::async_trait;
use shared::{CategoryAssignment, MasterCategory, StoreProfile};
use tienda_client::{ClientResult, HttpClient};

/// The three superadmin resources needed to open a store for editing
#[async_trait]
pub trait StoreDataSource: Send + Sync {
    /// Store row by id
    async fn fetch_store(&self, store_id: i64) -> ClientResult<StoreProfile>;

    /// Catalog rows annotated with the store's `asignada` flag
    async fn fetch_assignments(&self, store_id: i64) -> ClientResult<Vec<CategoryAssignment>>;

    /// Full master catalog in display order
    async fn fetch_master_categories(&self) -> ClientResult<Vec<MasterCategory>>;
}

#[async_trait]
impl StoreDataSource for HttpClient {
    async fn fetch_store(&self, store_id: i64) -> ClientResult<StoreProfile> {
        self.get_store(store_id).await
    }

    async fn fetch_assignments(&self, store_id: i64) -> ClientResult<Vec<CategoryAssignment>> {
        self.get_store_categories(store_id).await
    }

    async fn fetch_master_categories(&self) -> ClientResult<Vec<MasterCategory>> {
        self.get_master_categories().await
    }
}
