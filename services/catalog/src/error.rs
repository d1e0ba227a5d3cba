use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("a brand with this name already exists")]
    BrandNameTaken,
    #[error("a category with this name already exists")]
    CategoryNameTaken,
    #[error("a product with this sku already exists")]
    SkuTaken,
    #[error("unknown brand")]
    UnknownBrand,
    #[error("unknown category")]
    UnknownCategory,
    #[error("forbidden")]
    Forbidden,
    #[error("brand not found")]
    BrandNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::BrandNameTaken => "BRAND_NAME_TAKEN",
            Self::CategoryNameTaken => "CATEGORY_NAME_TAKEN",
            Self::SkuTaken => "SKU_TAKEN",
            Self::UnknownBrand => "UNKNOWN_BRAND",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::Forbidden => "FORBIDDEN",
            Self::BrandNotFound => "BRAND_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

fn field_errors_body(field: &str, message: &str) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert(field.to_owned(), serde_json::json!([message]));
    serde_json::Value::Object(map)
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        if let Self::Validation { field, message } = &self {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(field_errors_body(field, message)),
            )
                .into_response();
        }

        let status = match &self {
            Self::Validation { .. }
            | Self::UnknownBrand
            | Self::UnknownCategory
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::BrandNameTaken | Self::CategoryNameTaken | Self::SkuTaken => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BrandNotFound | Self::CategoryNotFound | Self::ProductNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
