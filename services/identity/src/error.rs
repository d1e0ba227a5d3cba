use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Identity service domain error variants.
///
/// `Validation` and `EmailTaken` render DRF-style field→messages bodies
/// (`{"field": ["msg"]}`) so clients can attach errors to form fields;
/// everything else renders the common `{kind, message}` shape.
#[derive(Debug, thiserror::Error)]
pub enum IdentityServiceError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("a user with this email already exists")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IdentityServiceError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

fn field_errors_body(field: &str, message: &str) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert(field.to_owned(), serde_json::json!([message]));
    serde_json::Value::Object(map)
}

impl IntoResponse for IdentityServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation { field, message } => {
                return (
                    StatusCode::BAD_REQUEST,
                    axum::Json(field_errors_body(field, message)),
                )
                    .into_response();
            }
            Self::EmailTaken => {
                return (
                    StatusCode::CONFLICT,
                    axum::Json(field_errors_body("email", &self.to_string())),
                )
                    .into_response();
            }
            _ => {}
        }

        let status = match &self {
            Self::Validation { .. } | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
