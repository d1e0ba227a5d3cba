use sea_orm::Database;
use tracing::info;

use kiosk_identity::config::IdentityConfig;
use kiosk_identity::router::build_router;
use kiosk_identity::state::AppState;

#[tokio::main]
async fn main() {
    kiosk_core::tracing::init_tracing();

    let config = IdentityConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.identity_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("identity service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
