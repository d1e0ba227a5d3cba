use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::IdentityServiceError;

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, IdentityServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(IdentityServiceError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct UpdateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateUserUseCase<U> {
    /// Apply a partial name update and return the updated user.
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, IdentityServiceError> {
        if input.first_name.is_none() && input.last_name.is_none() {
            return Err(IdentityServiceError::MissingData);
        }
        self.users
            .update_names(
                user_id,
                input.first_name.as_deref(),
                input.last_name.as_deref(),
            )
            .await?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(IdentityServiceError::UserNotFound)
    }
}
