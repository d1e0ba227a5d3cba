use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: the service can take traffic. Both services hold a
/// connection pool that reconnects on its own, so readiness matches
/// liveness here.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
