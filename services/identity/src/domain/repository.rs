#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Profile, ProfileChanges, User};
use crate::error::IdentityServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, IdentityServiceError>;

    /// Lookup by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityServiceError>;

    async fn email_exists(&self, email: &str) -> Result<bool, IdentityServiceError>;

    /// Insert the user and an empty profile in one transaction; a user row
    /// without its profile row must never be observable.
    async fn create_with_profile(&self, user: &User) -> Result<(), IdentityServiceError>;

    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<(), IdentityServiceError>;
}

/// Repository for user profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid)
    -> Result<Option<Profile>, IdentityServiceError>;

    async fn update(
        &self,
        user_id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<(), IdentityServiceError>;
}
