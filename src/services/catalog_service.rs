use serde_json::json;

use crate::{render::fmt_price, AppState};

/// Build the context used by the `partials/product_list` template.
///
/// - every catalog product, in catalog order
/// - `cart_amount` is how many units of it the cart holds (0 if none)
/// - catalog failure => empty list plus an error string
pub async fn product_list_ctx(state: &AppState) -> serde_json::Value {
    let amounts = state.cart.amounts_by_product().await;

    match state.api.products().await {
        Ok(products) => {
            let items: Vec<_> = products
                .into_iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "title": p.title,
                        "image": p.image,
                        "price": fmt_price(p.price),
                        "cart_amount": amounts.get(&p.id).copied().unwrap_or(0),
                    })
                })
                .collect();

            json!({
                "has_products": !items.is_empty(),
                "products": items,
                "error": serde_json::Value::Null
            })
        }
        Err(e) => {
            tracing::error!("catalog listing failed: {}", e);
            json!({
                "has_products": false,
                "products": [],
                "error": "Produtos indisponíveis no momento."
            })
        }
    }
}
