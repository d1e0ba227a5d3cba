use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use kiosk_identity_schema::{profiles, users};

use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::types::{Profile, ProfileChanges, User};
use crate::error::IdentityServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, IdentityServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, IdentityServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("check email exists")?;
        Ok(model.is_some())
    }

    async fn create_with_profile(&self, user: &User) -> Result<(), IdentityServiceError> {
        let result = self
            .db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let user = user.clone();
                Box::pin(async move {
                    users::ActiveModel {
                        id: Set(user.id),
                        email: Set(user.email.clone()),
                        password_hash: Set(user.password_hash.clone()),
                        first_name: Set(user.first_name.clone()),
                        last_name: Set(user.last_name.clone()),
                        date_of_birth: Set(user.date_of_birth),
                        is_active: Set(user.is_active),
                        is_staff: Set(user.is_staff),
                        is_superuser: Set(user.is_superuser),
                        created_at: Set(user.created_at),
                        updated_at: Set(user.updated_at),
                    }
                    .insert(txn)
                    .await?;

                    profiles::ActiveModel {
                        user_id: Set(user.id),
                        display_name: Set(String::new()),
                        bio: Set(String::new()),
                        location: Set(String::new()),
                        avatar: Set(None),
                        created_at: Set(user.created_at),
                        updated_at: Set(user.created_at),
                    }
                    .insert(txn)
                    .await?;

                    Ok(())
                })
            })
            .await;
        result.map_err(create_error)
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<(), IdentityServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(first) = first_name {
            am.first_name = Set(first.to_owned());
        }
        if let Some(last) = last_name {
            am.last_name = Set(last.to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user names")?;
        Ok(())
    }
}

/// A concurrent registration can slip past the `email_exists` pre-check; the
/// unique index on email reports it here as a conflict, not a 500.
fn create_error(err: TransactionError<sea_orm::DbErr>) -> IdentityServiceError {
    let db_err = match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    };
    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        IdentityServiceError::EmailTaken
    } else {
        anyhow::Error::new(db_err)
            .context("create user with profile")
            .into()
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        date_of_birth: model.date_of_birth,
        is_active: model.is_active,
        is_staff: model.is_staff,
        is_superuser: model.is_superuser,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, IdentityServiceError> {
        let model = profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find profile by user id")?;
        Ok(model.map(profile_from_model))
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<(), IdentityServiceError> {
        let mut am = profiles::ActiveModel {
            user_id: Set(user_id),
            ..Default::default()
        };
        if let Some(ref display_name) = changes.display_name {
            am.display_name = Set(display_name.clone());
        }
        if let Some(ref bio) = changes.bio {
            am.bio = Set(bio.clone());
        }
        if let Some(ref location) = changes.location {
            am.location = Set(location.clone());
        }
        if let Some(ref avatar) = changes.avatar {
            am.avatar = Set(Some(avatar.clone()));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update profile")?;
        Ok(())
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        user_id: model.user_id,
        display_name: model.display_name,
        bio: model.bio,
        location: model.location,
        avatar: model.avatar,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
