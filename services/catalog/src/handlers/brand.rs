use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_auth_types::identity::Identity;
use kiosk_domain::pagination::PageRequest;

use crate::error::CatalogServiceError;
use crate::handlers::require_staff;
use crate::state::AppState;
use crate::usecase::brand::{
    CreateBrandUseCase, DeleteBrandUseCase, GetBrandUseCase, ListBrandsUseCase, UpdateBrandUseCase,
};

#[derive(Serialize)]
pub struct BrandResponse {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::Brand> for BrandResponse {
    fn from(brand: crate::domain::types::Brand) -> Self {
        Self {
            id: brand.id.to_string(),
            name: brand.name,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

// ── GET /brands ──────────────────────────────────────────────────────────────

pub async fn list_brands(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<BrandResponse>>, CatalogServiceError> {
    let page = page.clamped();
    let usecase = ListBrandsUseCase {
        brands: state.brand_repo(),
    };
    let brands = usecase.execute(page.offset(), page.per_page as u64).await?;
    Ok(Json(brands.into_iter().map(BrandResponse::from).collect()))
}

// ── POST /brands ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
}

pub async fn create_brand(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateBrandRequest>,
) -> Result<(StatusCode, Json<BrandResponse>), CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = CreateBrandUseCase {
        brands: state.brand_repo(),
    };
    let brand = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(BrandResponse::from(brand))))
}

// ── GET /brands/{id} ─────────────────────────────────────────────────────────

pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BrandResponse>, CatalogServiceError> {
    let usecase = GetBrandUseCase {
        brands: state.brand_repo(),
    };
    let brand = usecase.execute(id).await?;
    Ok(Json(BrandResponse::from(brand)))
}

// ── PATCH /brands/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
}

pub async fn update_brand(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBrandRequest>,
) -> Result<Json<BrandResponse>, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = UpdateBrandUseCase {
        brands: state.brand_repo(),
    };
    let brand = usecase.execute(id, body.name.as_deref()).await?;
    Ok(Json(BrandResponse::from(brand)))
}

// ── DELETE /brands/{id} ──────────────────────────────────────────────────────

pub async fn delete_brand(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = DeleteBrandUseCase {
        brands: state.brand_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
