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
use crate::usecase::category::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::Category> for CategoryResponse {
    fn from(category: crate::domain::types::Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<CategoryResponse>>, CatalogServiceError> {
    let page = page.clamped();
    let usecase = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = usecase.execute(page.offset(), page.per_page as u64).await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

// ── POST /categories ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

pub async fn create_category(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = CreateCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

// ── GET /categories/{id} ─────────────────────────────────────────────────────

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryResponse>, CatalogServiceError> {
    let usecase = GetCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase.execute(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

// ── PATCH /categories/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

pub async fn update_category(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = UpdateCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase.execute(id, body.name.as_deref()).await?;
    Ok(Json(CategoryResponse::from(category)))
}

// ── DELETE /categories/{id} ──────────────────────────────────────────────────

pub async fn delete_category(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogServiceError> {
    require_staff(&identity)?;
    let usecase = DeleteCategoryUseCase {
        categories: state.category_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
