use axum::{Router, routing::get};
use crate::{AppState, controllers::home_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home_controller::home))
        .route("/products/list", get(home_controller::get_product_list))
        .route("/health", get(home_controller::health))
}
