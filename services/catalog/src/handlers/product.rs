use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_auth_types::identity::Identity;
use kiosk_domain::pagination::PageRequest;

use crate::domain::types::{Product, ProductChanges};
use crate::error::CatalogServiceError;
use crate::handlers::require_staff;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductUseCase,
};

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub sku: String,
    pub title: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub brand_id: String,
    pub category_ids: Vec<String>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            sku: product.sku,
            title: product.title,
            price_cents: product.price_cents,
            quantity: product.quantity,
            brand_id: product.brand_id.to_string(),
            category_ids: product
                .category_ids
                .iter()
                .map(Uuid::to_string)
                .collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

// ── GET /products ────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ProductResponse>>, CatalogServiceError> {
    let page = page.clamped();
    let usecase = ListProductsUseCase {
        products: state.product_repo(),
    };
    let products = usecase.execute(page.offset(), page.per_page as u64).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

// ── POST /products ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub sku: String,
    pub title: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub brand_id: Uuid,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

pub async fn create_product(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = CreateProductUseCase {
        products: state.product_repo(),
        brands: state.brand_repo(),
        categories: state.category_repo(),
    };
    let product = usecase
        .execute(CreateProductInput {
            sku: body.sku,
            title: body.title,
            price_cents: body.price_cents,
            quantity: body.quantity,
            brand_id: body.brand_id,
            category_ids: body.category_ids,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// ── GET /products/{id} ───────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    let usecase = GetProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase.execute(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

// ── PATCH /products/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub sku: Option<String>,
    pub title: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity: Option<i32>,
    pub brand_id: Option<Uuid>,
    pub category_ids: Option<Vec<Uuid>>,
}

pub async fn update_product(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = UpdateProductUseCase {
        products: state.product_repo(),
        brands: state.brand_repo(),
        categories: state.category_repo(),
    };
    let product = usecase
        .execute(
            id,
            ProductChanges {
                sku: body.sku,
                title: body.title,
                price_cents: body.price_cents,
                quantity: body.quantity,
                brand_id: body.brand_id,
                category_ids: body.category_ids,
            },
        )
        .await?;
    Ok(Json(ProductResponse::from(product)))
}

// ── DELETE /products/{id} ────────────────────────────────────────────────────

pub async fn delete_product(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = DeleteProductUseCase {
        products: state.product_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
