use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionError,
    TransactionTrait,
};
use uuid::Uuid;

use kiosk_catalog_schema::{brands, categories, product_categories, products};

use crate::domain::repository::{BrandRepository, CategoryRepository, ProductRepository};
use crate::domain::types::{Brand, Category, Product, ProductChanges};
use crate::error::CatalogServiceError;

/// Concurrent inserts can slip past the pre-insert uniqueness checks in the
/// usecases; the database unique index reports those here. Map them to the
/// same conflict error the sequential path returns instead of a 500.
fn map_unique_violation(
    err: sea_orm::DbErr,
    conflict: CatalogServiceError,
    context: &'static str,
) -> CatalogServiceError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        conflict
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}

fn flatten_txn_err(err: TransactionError<sea_orm::DbErr>) -> sea_orm::DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

// ── Brand repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBrandRepository {
    pub db: DatabaseConnection,
}

impl BrandRepository for DbBrandRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Brand>, CatalogServiceError> {
        let models = brands::Entity::find()
            .order_by_asc(brands::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list brands")?;
        Ok(models.into_iter().map(brand_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, CatalogServiceError> {
        let model = brands::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find brand by id")?;
        Ok(model.map(brand_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Brand>, CatalogServiceError> {
        let model = brands::Entity::find()
            .filter(brands::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find brand by name")?;
        Ok(model.map(brand_from_model))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, CatalogServiceError> {
        let count = brands::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check brand exists")?;
        Ok(count > 0)
    }

    async fn create(&self, brand: &Brand) -> Result<(), CatalogServiceError> {
        brands::ActiveModel {
            id: Set(brand.id),
            name: Set(brand.name.clone()),
            created_at: Set(brand.created_at),
            updated_at: Set(brand.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_unique_violation(e, CatalogServiceError::BrandNameTaken, "create brand"))?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), CatalogServiceError> {
        brands::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update brand name")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError> {
        let result = brands::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete brand")?;
        Ok(result.rows_affected > 0)
    }
}

fn brand_from_model(model: brands::Model) -> Brand {
    Brand {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Category>, CatalogServiceError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CatalogServiceError> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CatalogServiceError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find category by name")?;
        Ok(model.map(category_from_model))
    }

    async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, CatalogServiceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let count = categories::Entity::find()
            .filter(categories::Column::Id.is_in(ids.iter().copied()))
            .count(&self.db)
            .await
            .context("count categories")?;
        Ok(count)
    }

    async fn create(&self, category: &Category) -> Result<(), CatalogServiceError> {
        categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
            created_at: Set(category.created_at),
            updated_at: Set(category.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            map_unique_violation(e, CatalogServiceError::CategoryNameTaken, "create category")
        })?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), CatalogServiceError> {
        categories::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update category name")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError> {
        let result = categories::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Product>, CatalogServiceError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list products")?;

        let product_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links = if product_ids.is_empty() {
            vec![]
        } else {
            product_categories::Entity::find()
                .filter(product_categories::Column::ProductId.is_in(product_ids))
                .all(&self.db)
                .await
                .context("list product category links")?
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let category_ids = links
                    .iter()
                    .filter(|l| l.product_id == m.id)
                    .map(|l| l.category_id)
                    .collect();
                product_from_model(m, category_ids)
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogServiceError> {
        let Some(model) = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?
        else {
            return Ok(None);
        };
        let category_ids = self.category_ids_of(id).await?;
        Ok(Some(product_from_model(model, category_ids)))
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, CatalogServiceError> {
        let Some(model) = products::Entity::find()
            .filter(products::Column::Sku.eq(sku))
            .one(&self.db)
            .await
            .context("find product by sku")?
        else {
            return Ok(None);
        };
        let category_ids = self.category_ids_of(model.id).await?;
        Ok(Some(product_from_model(model, category_ids)))
    }

    async fn create_with_categories(&self, product: &Product) -> Result<(), CatalogServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let product = product.clone();
                Box::pin(async move {
                    products::ActiveModel {
                        id: Set(product.id),
                        sku: Set(product.sku.clone()),
                        title: Set(product.title.clone()),
                        price_cents: Set(product.price_cents),
                        quantity: Set(product.quantity),
                        brand_id: Set(product.brand_id),
                        created_at: Set(product.created_at),
                        updated_at: Set(product.updated_at),
                    }
                    .insert(txn)
                    .await?;

                    for category_id in &product.category_ids {
                        product_categories::ActiveModel {
                            product_id: Set(product.id),
                            category_id: Set(*category_id),
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| {
                map_unique_violation(
                    flatten_txn_err(e),
                    CatalogServiceError::SkuTaken,
                    "create product with categories",
                )
            })?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<(), CatalogServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let changes = changes.clone();
                Box::pin(async move {
                    let mut am = products::ActiveModel {
                        id: Set(id),
                        ..Default::default()
                    };
                    if let Some(ref sku) = changes.sku {
                        am.sku = Set(sku.clone());
                    }
                    if let Some(ref title) = changes.title {
                        am.title = Set(title.clone());
                    }
                    if let Some(price_cents) = changes.price_cents {
                        am.price_cents = Set(price_cents);
                    }
                    if let Some(quantity) = changes.quantity {
                        am.quantity = Set(quantity);
                    }
                    if let Some(brand_id) = changes.brand_id {
                        am.brand_id = Set(brand_id);
                    }
                    am.updated_at = Set(Utc::now());
                    am.update(txn).await?;

                    // A supplied category set replaces all existing links.
                    if let Some(ref category_ids) = changes.category_ids {
                        product_categories::Entity::delete_many()
                            .filter(product_categories::Column::ProductId.eq(id))
                            .exec(txn)
                            .await?;
                        for category_id in category_ids {
                            product_categories::ActiveModel {
                                product_id: Set(id),
                                category_id: Set(*category_id),
                            }
                            .insert(txn)
                            .await?;
                        }
                    }

                    Ok(())
                })
            })
            .await
            .context("update product")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CatalogServiceError> {
        let result = products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

impl DbProductRepository {
    async fn category_ids_of(&self, product_id: Uuid) -> Result<Vec<Uuid>, CatalogServiceError> {
        let links = product_categories::Entity::find()
            .filter(product_categories::Column::ProductId.eq(product_id))
            .all(&self.db)
            .await
            .context("find product category links")?;
        Ok(links.into_iter().map(|l| l.category_id).collect())
    }
}

fn product_from_model(model: products::Model, category_ids: Vec<Uuid>) -> Product {
    Product {
        id: model.id,
        sku: model.sku,
        title: model.title,
        price_cents: model.price_cents,
        quantity: model.quantity,
        brand_id: model.brand_id,
        category_ids,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
