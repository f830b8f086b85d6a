use thiserror::Error;

/// Failures of a single cart operation. None of these leave the operation;
/// the store turns each into a notice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CartError {
    #[error("product {product_id}: requested {requested}, only {available} in stock")]
    OutOfStock {
        product_id: i64,
        requested: i64,
        available: i64,
    },

    #[error("product {0} is not in the cart")]
    NotInCart(i64),

    #[error("catalog request failed: {0}")]
    Fetch(String),

    #[error("storage error: {0}")]
    Storage(String),
}
