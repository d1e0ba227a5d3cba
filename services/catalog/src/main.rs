use sea_orm::Database;
use tracing::info;

use kiosk_catalog::config::CatalogConfig;
use kiosk_catalog::router::build_router;
use kiosk_catalog::state::AppState;

#[tokio::main]
async fn main() {
    kiosk_core::tracing::init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
