use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_auth_types::identity::Identity;

use crate::domain::authz::allow_owner;
use crate::domain::types::User;
use crate::error::IdentityServiceError;
use crate::state::AppState;
use crate::usecase::user::{GetUserUseCase, UpdateUserInput, UpdateUserUseCase};

/// Public user body: no flags, no hash, no birth date.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, IdentityServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    // The user resource is self-only, reads included.
    allow_owner(identity.user_id, &user)?;
    Ok(Json(UserResponse::from(user)))
}

// ── PATCH/PUT /users/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn update_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, IdentityServiceError> {
    let get = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = get.execute(id).await?;
    allow_owner(identity.user_id, &user)?;

    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
    };
    let updated = usecase
        .execute(
            id,
            UpdateUserInput {
                first_name: body.first_name,
                last_name: body.last_name,
            },
        )
        .await?;
    Ok(Json(UserResponse::from(updated)))
}
