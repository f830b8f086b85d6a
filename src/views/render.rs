use serde_json::json;

use crate::AppState;

/// Display-only: "R$ 179,90".
pub fn fmt_price(v: f64) -> String {
    format!("R$ {:.2}", v).replace('.', ",")
}

pub fn cart_size_label(size: usize) -> String {
    if size == 1 {
        "1 item".to_string()
    } else {
        format!("{size} itens")
    }
}

pub async fn render_full(state: &AppState, title: &str, body_html: String) -> Result<String, String> {
    let size = state.cart.cart_size().await;

    let ctx = json!({
        "title": title,
        "body": body_html,
        "cart_size": size,
        "cart_size_label": cart_size_label(size),
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}
