use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use kiosk_auth_types::token::{
    ACCESS_TOKEN_EXP, JwtClaims, REFRESH_TOKEN_EXP, TokenKind, validate_refresh_token,
};
use kiosk_domain::email::normalize_email;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::IdentityServiceError;
use crate::usecase::password::verify_password;

/// A freshly issued access/refresh pair. Serialized as-is in login, refresh,
/// and registration responses.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    #[serde(skip)]
    pub access_token_exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

fn sign(
    user: &User,
    typ: TokenKind,
    exp: u64,
    secret: &str,
) -> Result<String, IdentityServiceError> {
    let claims = JwtClaims {
        sub: user.id.to_string(),
        staff: user.is_staff,
        typ,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| IdentityServiceError::Internal(e.into()))
}

pub fn issue_access_token(user: &User, secret: &str) -> Result<(String, u64), IdentityServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    Ok((sign(user, TokenKind::Access, exp, secret)?, exp))
}

pub fn issue_refresh_token(user: &User, secret: &str) -> Result<String, IdentityServiceError> {
    sign(user, TokenKind::Refresh, now_secs() + REFRESH_TOKEN_EXP, secret)
}

/// Issue the access/refresh pair for a user. Used by login, refresh, and
/// registration.
pub fn issue_token_pair(user: &User, secret: &str) -> Result<TokenPair, IdentityServiceError> {
    let (access, access_token_exp) = issue_access_token(user, secret)?;
    let refresh = issue_refresh_token(user, secret)?;
    Ok(TokenPair {
        access,
        refresh,
        access_token_exp,
    })
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub tokens: TokenPair,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> LoginUseCase<U> {
    /// Verify credentials and issue a token pair. Unknown email, wrong
    /// password, and deactivated accounts all collapse into the same
    /// credential error so the response does not leak which one failed.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, IdentityServiceError> {
        let email = normalize_email(&input.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(IdentityServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(IdentityServiceError::InvalidCredentials);
        }
        if !user.is_active {
            return Err(IdentityServiceError::InvalidCredentials);
        }

        let tokens = issue_token_pair(&user, &self.jwt_secret)?;
        Ok(LoginOutput {
            user_id: user.id,
            tokens,
        })
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub user_id: Uuid,
    pub tokens: TokenPair,
}

pub struct RefreshTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> RefreshTokenUseCase<U> {
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, IdentityServiceError> {
        // Validate refresh token (sig + exp + kind); access tokens are
        // rejected here by their `typ` claim.
        let claims = validate_refresh_token(refresh_token_value, &self.jwt_secret)
            .map_err(|_| IdentityServiceError::InvalidRefreshToken)?;

        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| IdentityServiceError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(IdentityServiceError::InvalidRefreshToken)?;

        let tokens = issue_token_pair(&user, &self.jwt_secret)?;
        Ok(RefreshTokenOutput {
            user_id: user.id,
            tokens,
        })
    }
}
