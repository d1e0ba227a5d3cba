use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{BrandRepository, CategoryRepository, ProductRepository};
use crate::domain::types::{Product, ProductChanges};
use crate::error::CatalogServiceError;

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        self.products.list(offset, limit).await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<Product, CatalogServiceError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub sku: String,
    pub title: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub brand_id: Uuid,
    pub category_ids: Vec<Uuid>,
}

pub struct CreateProductUseCase<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    pub products: P,
    pub brands: B,
    pub categories: C,
}

impl<P, B, C> CreateProductUseCase<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    /// Validate and create a product together with its category links.
    ///
    /// Field checks first, then the sku conflict, then referential checks on
    /// brand and categories. The row and its links are written in one
    /// transaction.
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, CatalogServiceError> {
        let sku = input.sku.trim().to_owned();
        let title = input.title.trim().to_owned();
        validate_fields(Some(&sku), Some(&title), Some(input.price_cents), Some(input.quantity))?;

        if self.products.find_by_sku(&sku).await?.is_some() {
            return Err(CatalogServiceError::SkuTaken);
        }
        if !self.brands.exists(input.brand_id).await? {
            return Err(CatalogServiceError::UnknownBrand);
        }

        let mut category_ids = input.category_ids;
        category_ids.sort_unstable();
        category_ids.dedup();
        if self.categories.count_existing(&category_ids).await? != category_ids.len() as u64 {
            return Err(CatalogServiceError::UnknownCategory);
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::now_v7(),
            sku,
            title,
            price_cents: input.price_cents,
            quantity: input.quantity,
            brand_id: input.brand_id,
            category_ids,
            created_at: now,
            updated_at: now,
        };
        self.products.create_with_categories(&product).await?;
        Ok(product)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    pub products: P,
    pub brands: B,
    pub categories: C,
}

impl<P, B, C> UpdateProductUseCase<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    /// Apply a partial update and return the updated product. A supplied
    /// category set replaces the existing links atomically with the row
    /// update.
    pub async fn execute(
        &self,
        id: Uuid,
        mut changes: ProductChanges,
    ) -> Result<Product, CatalogServiceError> {
        if changes.is_empty() {
            return Err(CatalogServiceError::MissingData);
        }

        changes.sku = changes.sku.map(|s| s.trim().to_owned());
        changes.title = changes.title.map(|t| t.trim().to_owned());
        validate_fields(
            changes.sku.as_deref(),
            changes.title.as_deref(),
            changes.price_cents,
            changes.quantity,
        )?;

        if self.products.find_by_id(id).await?.is_none() {
            return Err(CatalogServiceError::ProductNotFound);
        }
        if let Some(sku) = &changes.sku {
            if let Some(other) = self.products.find_by_sku(sku).await? {
                if other.id != id {
                    return Err(CatalogServiceError::SkuTaken);
                }
            }
        }
        if let Some(brand_id) = changes.brand_id {
            if !self.brands.exists(brand_id).await? {
                return Err(CatalogServiceError::UnknownBrand);
            }
        }
        if let Some(ids) = &mut changes.category_ids {
            ids.sort_unstable();
            ids.dedup();
            if self.categories.count_existing(ids).await? != ids.len() as u64 {
                return Err(CatalogServiceError::UnknownCategory);
            }
        }

        self.products.update(id, &changes).await?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> DeleteProductUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        if !self.products.delete(id).await? {
            return Err(CatalogServiceError::ProductNotFound);
        }
        Ok(())
    }
}

/// Shared field validation for create (all `Some`) and update (sparse).
fn validate_fields(
    sku: Option<&str>,
    title: Option<&str>,
    price_cents: Option<i64>,
    quantity: Option<i32>,
) -> Result<(), CatalogServiceError> {
    if sku.is_some_and(str::is_empty) {
        return Err(CatalogServiceError::validation(
            "sku",
            "sku must not be empty",
        ));
    }
    if title.is_some_and(str::is_empty) {
        return Err(CatalogServiceError::validation(
            "title",
            "title must not be empty",
        ));
    }
    if price_cents.is_some_and(|p| p < 0) {
        return Err(CatalogServiceError::validation(
            "price_cents",
            "price must not be negative",
        ));
    }
    if quantity.is_some_and(|q| q < 0) {
        return Err(CatalogServiceError::validation(
            "quantity",
            "quantity must not be negative",
        ));
    }
    Ok(())
}
