use axum::{
    extract::{Form, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    controllers::home_controller::page,
    models::{Cart, Notice},
    render,
    services::cart_service::UpdateProductAmount,
    AppState,
};

fn cart_updated_trigger() -> HeaderValue {
    let value = json!({ "cartUpdated": true }).to_string();
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("{}"))
}

fn cart_items_ctx(cart: &Cart) -> serde_json::Value {
    let items: Vec<_> = cart
        .items()
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "title": p.title,
                "image": p.image,
                "price": render::fmt_price(p.price),
                "amount": p.amount,
                "inc": p.amount.saturating_add(1),
                "dec": p.amount - 1,
                "at_min": p.amount <= 1,
            })
        })
        .collect();

    json!({ "has_items": !items.is_empty(), "items": items })
}

async fn render_cart_items(state: &AppState) -> Result<String, String> {
    let cart = state.cart.snapshot().await;
    state
        .hbs
        .render("partials/cart_items", &cart_items_ctx(&cart))
        .map_err(|e| e.to_string())
}

async fn render_cart_badge(state: &AppState) -> Result<String, String> {
    let size = state.cart.cart_size().await;
    state
        .hbs
        .render(
            "partials/cart_badge",
            &json!({ "cart_size": size, "cart_size_label": render::cart_size_label(size) }),
        )
        .map_err(|e| e.to_string())
}

fn notice_response(state: &AppState, notice: &Notice) -> Response {
    let html = state
        .hbs
        .render("partials/notice", notice)
        .unwrap_or_else(|e| format!("template error: {e}"));
    (StatusCode::OK, Html(html)).into_response()
}

/// Success carries no markup; pages refresh their own fragments on `cartUpdated`.
fn updated_response() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Trigger", cart_updated_trigger());
    (StatusCode::OK, headers, Html(String::new())).into_response()
}

// GET /cart
pub async fn get_cart_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let items = match render_cart_items(&state).await {
        Ok(s) => s,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response(),
    };

    let body = match state.hbs.render("pages/cart", &json!({ "cart_items": items })) {
        Ok(s) => s,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response(),
    };

    page(&state, &headers, StatusCode::OK, "Carrinho", body).await
}

// GET /cart/items  (HTMX partial)
pub async fn get_cart_items(State(state): State<AppState>) -> Response {
    match render_cart_items(&state).await {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response(),
    }
}

// GET /cart/badge  (HTMX partial)
pub async fn get_cart_badge(State(state): State<AppState>) -> Response {
    match render_cart_badge(&state).await {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response(),
    }
}

// GET /api/cart
pub async fn get_cart_json(State(state): State<AppState>) -> Json<Cart> {
    Json(state.cart.snapshot().await)
}

// POST /cart/:id/add
pub async fn post_add_product(State(state): State<AppState>, Path(product_id): Path<i64>) -> Response {
    if let Some(notice) = state.cart.add_product(product_id).await {
        return notice_response(&state, &notice);
    }
    updated_response()
}

// POST /cart/:id/remove
pub async fn post_remove_product(State(state): State<AppState>, Path(product_id): Path<i64>) -> Response {
    if let Some(notice) = state.cart.remove_product(product_id).await {
        return notice_response(&state, &notice);
    }
    updated_response()
}

#[derive(Deserialize)]
pub struct AmountForm {
    pub amount: String,
}

// POST /cart/:id/amount
pub async fn post_update_amount(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Form(form): Form<AmountForm>,
) -> Response {
    let amount: i64 = match form.amount.trim().parse() {
        Ok(a) => a,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Html("Enter a valid amount.".to_string())).into_response();
        }
    };

    let update = UpdateProductAmount { product_id, amount };
    if let Some(notice) = state.cart.update_product_amount(update).await {
        return notice_response(&state, &notice);
    }
    updated_response()
}
