use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{render, services::catalog_service, AppState};

pub(crate) fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Wraps `body` in the base layout unless HTMX asked for the fragment only.
pub(crate) async fn page(state: &AppState, headers: &HeaderMap, status: StatusCode, title: &str, body: String) -> Response {
    if is_htmx(headers) {
        return (status, Html(body)).into_response();
    }

    match render::render_full(state, title, body).await {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

fn template_error(e: impl std::fmt::Display) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response()
}

async fn render_product_list(state: &AppState) -> Result<String, String> {
    let ctx = catalog_service::product_list_ctx(state).await;
    state
        .hbs
        .render("partials/product_list", &ctx)
        .map_err(|e| e.to_string())
}

// GET /
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let list = match render_product_list(&state).await {
        Ok(s) => s,
        Err(e) => return template_error(e),
    };

    let body = match state.hbs.render("pages/home", &json!({ "product_list": list })) {
        Ok(s) => s,
        Err(e) => return template_error(e),
    };

    page(&state, &headers, StatusCode::OK, "Home", body).await
}

// GET /products/list  (HTMX partial)
pub async fn get_product_list(State(state): State<AppState>) -> Response {
    match render_product_list(&state).await {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => template_error(e),
    }
}

pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let body = match state.hbs.render("pages/not_found", &json!({})) {
        Ok(s) => s,
        Err(e) => return template_error(e),
    };

    page(&state, &headers, StatusCode::NOT_FOUND, "404", body).await
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Html("ok".to_string()))
}
