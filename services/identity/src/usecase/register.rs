use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use kiosk_domain::birthdate::is_adult_on;
use kiosk_domain::email::{normalize_email, validate_email};

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::IdentityServiceError;
use crate::usecase::password::hash_password;

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    /// Validate a registration request and create the user plus an empty
    /// profile.
    ///
    /// Checks run in a fixed order and stop at the first failure, each tagged
    /// with the offending field: email syntax, email uniqueness (conflict,
    /// not validation), password length and confirmation, then minimum age
    /// when a birth date was supplied.
    pub async fn execute(&self, input: RegisterInput) -> Result<User, IdentityServiceError> {
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(IdentityServiceError::validation(
                "email",
                "enter a valid email address",
            ));
        }
        if self.users.email_exists(&email).await? {
            return Err(IdentityServiceError::EmailTaken);
        }
        if input.password.len() < MIN_PASSWORD_LENGTH {
            return Err(IdentityServiceError::validation(
                "password",
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        if input.password != input.password_confirm {
            return Err(IdentityServiceError::validation(
                "password_confirm",
                "passwords provided don't match",
            ));
        }
        if let Some(birth) = input.date_of_birth {
            if !is_adult_on(Utc::now().date_naive(), birth) {
                return Err(IdentityServiceError::validation(
                    "date_of_birth",
                    "user must be 18 or older",
                ));
            }
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email,
            password_hash: hash_password(&input.password)?,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        };
        self.users.create_with_profile(&user).await?;
        Ok(user)
    }
}
