use axum::{
    Router,
    routing::{get, post},
};

use shop_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    checkout::checkout,
    health::{healthz, readyz},
    order::{confirm_order, get_order},
    product::{create_product, delete_product, get_product, list_products, update_product},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Catalog
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/{id}", get(get_product))
        // Orders
        .route("/api/v1/checkout", post(checkout))
        .route("/api/v1/orders/{id}", get(get_order))
        .route("/api/v1/orders/{id}/confirm", post(confirm_order))
        // Catalog administration
        .route("/admin/products", post(create_product))
        .route(
            "/admin/products/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .with_state(state)
        .layer(trace_layer())
        .layer(request_id_layer())
}
