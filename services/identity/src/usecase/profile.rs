use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{Profile, ProfileChanges};
use crate::error::IdentityServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetProfileUseCase<P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, IdentityServiceError> {
        self.profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or(IdentityServiceError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateProfileUseCase<P> {
    /// Apply a partial profile update and return the updated profile.
    pub async fn execute(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, IdentityServiceError> {
        if changes.is_empty() {
            return Err(IdentityServiceError::MissingData);
        }
        self.profiles.update(user_id, &changes).await?;
        self.profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or(IdentityServiceError::ProfileNotFound)
    }
}
