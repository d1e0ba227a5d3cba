use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use kiosk_core::health::{healthz, readyz};
use kiosk_core::middleware::request_id_layer;

use crate::handlers::{
    brand::{create_brand, delete_brand, get_brand, list_brands, update_brand},
    category::{create_category, delete_category, get_category, list_categories, update_category},
    product::{create_product, delete_product, get_product, list_products, update_product},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Brands
        .route("/brands", get(list_brands).post(create_brand))
        .route(
            "/brands/{id}",
            get(get_brand).patch(update_brand).delete(delete_brand),
        )
        // Categories
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        // Products
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
