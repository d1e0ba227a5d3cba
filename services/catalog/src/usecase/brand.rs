use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::BrandRepository;
use crate::domain::types::Brand;
use crate::error::CatalogServiceError;

// ── ListBrands ───────────────────────────────────────────────────────────────

pub struct ListBrandsUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> ListBrandsUseCase<B> {
    pub async fn execute(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Brand>, CatalogServiceError> {
        self.brands.list(offset, limit).await
    }
}

// ── GetBrand ─────────────────────────────────────────────────────────────────

pub struct GetBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> GetBrandUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<Brand, CatalogServiceError> {
        self.brands
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BrandNotFound)
    }
}

// ── CreateBrand ──────────────────────────────────────────────────────────────

pub struct CreateBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> CreateBrandUseCase<B> {
    pub async fn execute(&self, name: &str) -> Result<Brand, CatalogServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogServiceError::validation(
                "name",
                "name must not be empty",
            ));
        }
        if self.brands.find_by_name(name).await?.is_some() {
            return Err(CatalogServiceError::BrandNameTaken);
        }

        let now = Utc::now();
        let brand = Brand {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.brands.create(&brand).await?;
        Ok(brand)
    }
}

// ── UpdateBrand ──────────────────────────────────────────────────────────────

pub struct UpdateBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> UpdateBrandUseCase<B> {
    /// Rename a brand. Renaming to its current name is a no-op, not a
    /// conflict.
    pub async fn execute(
        &self,
        id: Uuid,
        name: Option<&str>,
    ) -> Result<Brand, CatalogServiceError> {
        let Some(name) = name else {
            return Err(CatalogServiceError::MissingData);
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogServiceError::validation(
                "name",
                "name must not be empty",
            ));
        }
        if !self.brands.exists(id).await? {
            return Err(CatalogServiceError::BrandNotFound);
        }
        if let Some(other) = self.brands.find_by_name(name).await? {
            if other.id != id {
                return Err(CatalogServiceError::BrandNameTaken);
            }
        }

        self.brands.update_name(id, name).await?;
        self.brands
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BrandNotFound)
    }
}

// ── DeleteBrand ──────────────────────────────────────────────────────────────

pub struct DeleteBrandUseCase<B: BrandRepository> {
    pub brands: B,
}

impl<B: BrandRepository> DeleteBrandUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        if !self.brands.delete(id).await? {
            return Err(CatalogServiceError::BrandNotFound);
        }
        Ok(())
    }
}
