use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use kiosk_auth_types::identity::JwtSecret;

use crate::infra::db::{DbBrandRepository, DbCategoryRepository, DbProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn brand_repo(&self) -> DbBrandRepository {
        DbBrandRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        JwtSecret(state.jwt_secret.clone())
    }
}
