//! The authoritative in-memory cart.
//!
//! Every operation runs under one fair async mutex for its whole duration,
//! remote fetches included, so concurrent calls apply in arrival order and
//! never overwrite each other. A mutation is committed to memory only after
//! it was written to storage.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    errors::CartError,
    models::{Cart, Notice, Product},
};

use super::{
    api::ApiClient,
    notifier::{self, Notifier},
    storage::{LocalStorage, CART_KEY},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: i64,
    pub amount: i64,
}

#[derive(Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    api: ApiClient,
    storage: LocalStorage,
    notifier: Notifier,
}

impl CartStore {
    /// Seeds the cart from storage. A missing or unreadable entry gives an empty cart.
    pub async fn load(api: ApiClient, storage: LocalStorage, notifier: Notifier) -> Self {
        let cart = match storage.get_item(CART_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(entries) => Cart::from_entries(entries),
                Err(e) => {
                    tracing::warn!("stored cart is unreadable, starting empty: {}", e);
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("could not read storage, starting with an empty cart: {}", e);
                Cart::new()
            }
        };

        tracing::info!(items = cart.len(), "cart loaded from {}", storage.path().display());

        Self {
            cart: Arc::new(Mutex::new(cart)),
            api,
            storage,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Number of distinct products in the cart.
    pub async fn cart_size(&self) -> usize {
        self.cart.lock().await.len()
    }

    pub async fn amounts_by_product(&self) -> HashMap<i64, i64> {
        self.cart.lock().await.amounts_by_product()
    }

    /// Adds one unit of the product. Returns the notice shown to the shopper, if any.
    pub async fn add_product(&self, product_id: i64) -> Option<Notice> {
        let mut cart = self.cart.lock().await;

        match self.try_add(&cart, product_id).await {
            Ok(next) => {
                tracing::info!(product_id, amount = next.amount_of(product_id), "product added to cart");
                *cart = next;
                self.notifier.cart_updated();
                None
            }
            Err(e) => Some(self.fail(e, notifier::MSG_ADD_FAILED)),
        }
    }

    pub async fn remove_product(&self, product_id: i64) -> Option<Notice> {
        let mut cart = self.cart.lock().await;

        match self.try_remove(&cart, product_id).await {
            Ok(next) => {
                tracing::info!(product_id, "product removed from cart");
                *cart = next;
                self.notifier.cart_updated();
                None
            }
            Err(e) => Some(self.fail(e, notifier::MSG_REMOVE_FAILED)),
        }
    }

    /// Amounts below one are ignored without a notice, as is a product that
    /// is not in the cart.
    pub async fn update_product_amount(&self, update: UpdateProductAmount) -> Option<Notice> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            return None;
        }

        let mut cart = self.cart.lock().await;

        match self.try_update(&cart, product_id, amount).await {
            Ok(Some(next)) => {
                tracing::info!(product_id, amount, "cart amount updated");
                *cart = next;
                self.notifier.cart_updated();
                None
            }
            Ok(None) => {
                tracing::debug!(product_id, "amount update for a product not in the cart");
                None
            }
            Err(e) => Some(self.fail(e, notifier::MSG_UPDATE_FAILED)),
        }
    }

    async fn try_add(&self, cart: &Cart, product_id: i64) -> Result<Cart, CartError> {
        let current = cart.amount_of(product_id);
        let desired = current.checked_add(1).ok_or(CartError::OutOfStock {
            product_id,
            requested: current,
            available: current,
        })?;
        self.check_stock(product_id, desired).await?;

        let mut next = cart.clone();
        if !next.set_amount(product_id, desired) {
            let product = self.api.product(product_id).await.map_err(CartError::Fetch)?;
            if product.id != product_id {
                return Err(CartError::Fetch(format!(
                    "asked for product {product_id}, got {}",
                    product.id
                )));
            }
            next.upsert(product, desired);
        }

        self.persist(&next).await?;
        Ok(next)
    }

    async fn try_remove(&self, cart: &Cart, product_id: i64) -> Result<Cart, CartError> {
        let mut next = cart.clone();
        next.remove(product_id).ok_or(CartError::NotInCart(product_id))?;

        self.persist(&next).await?;
        Ok(next)
    }

    async fn try_update(&self, cart: &Cart, product_id: i64, amount: i64) -> Result<Option<Cart>, CartError> {
        self.check_stock(product_id, amount).await?;

        let mut next = cart.clone();
        if !next.set_amount(product_id, amount) {
            return Ok(None);
        }

        self.persist(&next).await?;
        Ok(Some(next))
    }

    async fn check_stock(&self, product_id: i64, requested: i64) -> Result<(), CartError> {
        let stock = self.api.stock(product_id).await.map_err(CartError::Fetch)?;

        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }
        Ok(())
    }

    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart).map_err(|e| CartError::Storage(e.to_string()))?;
        self.storage
            .set_item(CART_KEY, raw)
            .await
            .map_err(CartError::Storage)
    }

    fn fail(&self, err: CartError, failure_message: &str) -> Notice {
        tracing::debug!("cart operation failed: {}", err);

        let notice = match err {
            CartError::OutOfStock { .. } => Notice::warning(notifier::MSG_OUT_OF_STOCK),
            _ => Notice::error(failure_message),
        };
        self.notifier.notify(notice)
    }
}
