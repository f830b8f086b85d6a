use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::cart_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/cart", get(cart_controller::get_cart_page))
        .route("/cart/items", get(cart_controller::get_cart_items))
        .route("/cart/badge", get(cart_controller::get_cart_badge))
        .route("/api/cart", get(cart_controller::get_cart_json))
        .route("/cart/:id/add", post(cart_controller::post_add_product))
        .route("/cart/:id/remove", post(cart_controller::post_remove_product))
        .route("/cart/:id/amount", post(cart_controller::post_update_amount))
}
