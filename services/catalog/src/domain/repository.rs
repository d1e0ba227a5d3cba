#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Brand, Category, Product, ProductChanges};
use crate::error::CatalogServiceError;

/// Repository for brands.
pub trait BrandRepository: Send + Sync {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Brand>, CatalogServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, CatalogServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Brand>, CatalogServiceError>;

    async fn exists(&self, id: Uuid) -> Result<bool, CatalogServiceError>;

    async fn create(&self, brand: &Brand) -> Result<(), CatalogServiceError>;

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), CatalogServiceError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError>;
}

/// Repository for categories.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Category>, CatalogServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CatalogServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CatalogServiceError>;

    /// Count how many of the given ids exist; used to validate link sets.
    async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, CatalogServiceError>;

    async fn create(&self, category: &Category) -> Result<(), CatalogServiceError>;

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), CatalogServiceError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError>;
}

/// Repository for products and their category links.
pub trait ProductRepository: Send + Sync {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Product>, CatalogServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogServiceError>;

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, CatalogServiceError>;

    /// Insert the product and its category links in one transaction.
    async fn create_with_categories(&self, product: &Product) -> Result<(), CatalogServiceError>;

    /// Apply a partial update; a `Some` category set replaces all links in
    /// the same transaction as the row update.
    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<(), CatalogServiceError>;

    /// Returns false when no row matched. Links go with the row (cascade).
    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError>;
}
