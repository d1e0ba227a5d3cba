use axum::{
    Json,
    extract::{Path, State},
    http::Method,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_auth_types::identity::Identity;

use crate::domain::authz::allow_owner_or_read_only;
use crate::domain::types::{Profile, ProfileChanges};
use crate::error::IdentityServiceError;
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub display_name: String,
    pub bio: String,
    pub location: String,
    pub avatar: Option<String>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "kiosk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            display_name: profile.display_name,
            bio: profile.bio,
            location: profile.location,
            avatar: profile.avatar,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── GET /users/{id}/profile ──────────────────────────────────────────────────

/// Profiles are public information: any authenticated caller may read them.
pub async fn get_profile(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, IdentityServiceError> {
    let usecase = GetProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

// ── PATCH/PUT /users/{id}/profile ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
}

pub async fn update_profile(
    method: Method,
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, IdentityServiceError> {
    let get = GetProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = get.execute(id).await?;
    allow_owner_or_read_only(&method, identity.user_id, &profile)?;

    let usecase = UpdateProfileUseCase {
        profiles: state.profile_repo(),
    };
    let updated = usecase
        .execute(
            id,
            ProfileChanges {
                display_name: body.display_name,
                bio: body.bio,
                location: body.location,
                avatar: body.avatar,
            },
        )
        .await?;
    Ok(Json(ProfileResponse::from(updated)))
}
