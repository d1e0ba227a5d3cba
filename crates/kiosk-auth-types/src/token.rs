//! JWT access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_IDENTITY_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

/// Access-token JWT lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_EXP: u64 = 3600;

/// Refresh-token JWT lifetime in seconds (7 days).
pub const REFRESH_TOKEN_EXP: u64 = 604800;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub is_staff: bool,
    pub access_token_exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("wrong token kind")]
    WrongKind,
}

/// Discriminates access tokens from refresh tokens. Carried in the `typ`
/// claim so neither kind is accepted where the other is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_IDENTITY_SERVICE", test), derive(Serialize))]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims payload shared by token creation (identity service) and
/// validation (every service).
///
/// `sub` carries the user id as a UUID string, `staff` the staff flag,
/// `typ` the token kind, and `exp` the expiration in seconds since the
/// UNIX epoch. Validity is decided by signature + expiry + kind alone,
/// with no server-side token state.
///
/// [`Deserialize`] is always available — all consumers validate tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_IDENTITY_SERVICE`** cargo
/// feature. Only the identity service enables it because it is the sole
/// token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_IDENTITY_SERVICE", test), derive(Serialize))]
pub struct JwtClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Staff flag carried into authorization checks.
    pub staff: bool,
    /// Token kind (`access` or `refresh`).
    pub typ: TokenKind,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew between services.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer access token, returning parsed identity.
///
/// This is the primary public API for token validation. The `Identity`
/// extractor calls this on every authenticated request.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.typ != TokenKind::Access {
        return Err(AuthError::WrongKind);
    }
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        is_staff: claims.staff,
        access_token_exp: claims.exp,
    })
}

/// Validate a refresh token and return raw JWT claims. Rejects access tokens
/// by their `typ` claim.
///
/// Used by the identity service's refresh flow — validates the refresh token,
/// then looks up the user from the `sub` claim to issue new tokens.
///
/// Requires the `USE_ONLY_IN_IDENTITY_SERVICE` feature. Only the identity
/// service should call this directly; all other consumers use
/// [`validate_access_token`].
#[cfg(any(feature = "USE_ONLY_IN_IDENTITY_SERVICE", test))]
pub fn validate_refresh_token(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.typ != TokenKind::Refresh {
        return Err(AuthError::WrongKind);
    }
    Ok(claims)
}
