use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::CategoryRepository;
use crate::domain::types::Category;
use crate::error::CatalogServiceError;

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub async fn execute(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Category>, CatalogServiceError> {
        self.categories.list(offset, limit).await
    }
}

// ── GetCategory ──────────────────────────────────────────────────────────────

pub struct GetCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> GetCategoryUseCase<C> {
    pub async fn execute(&self, id: Uuid) -> Result<Category, CatalogServiceError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::CategoryNotFound)
    }
}

// ── CreateCategory ───────────────────────────────────────────────────────────

pub struct CreateCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> CreateCategoryUseCase<C> {
    pub async fn execute(&self, name: &str) -> Result<Category, CatalogServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogServiceError::validation(
                "name",
                "name must not be empty",
            ));
        }
        if self.categories.find_by_name(name).await?.is_some() {
            return Err(CatalogServiceError::CategoryNameTaken);
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.categories.create(&category).await?;
        Ok(category)
    }
}

// ── UpdateCategory ───────────────────────────────────────────────────────────

pub struct UpdateCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> UpdateCategoryUseCase<C> {
    /// Rename a category. Renaming to its current name is a no-op, not a
    /// conflict.
    pub async fn execute(
        &self,
        id: Uuid,
        name: Option<&str>,
    ) -> Result<Category, CatalogServiceError> {
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
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(CatalogServiceError::CategoryNotFound);
        }
        if let Some(other) = self.categories.find_by_name(name).await? {
            if other.id != id {
                return Err(CatalogServiceError::CategoryNameTaken);
            }
        }

        self.categories.update_name(id, name).await?;
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::CategoryNotFound)
    }
}

// ── DeleteCategory ───────────────────────────────────────────────────────────

pub struct DeleteCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> DeleteCategoryUseCase<C> {
    pub async fn execute(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        if !self.categories.delete(id).await? {
            return Err(CatalogServiceError::CategoryNotFound);
        }
        Ok(())
    }
}
