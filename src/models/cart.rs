use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Product;

/// Ordered list of products, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from stored entries, keeping the first entry per id and
    /// dropping entries without a positive amount.
    pub fn from_entries(entries: Vec<Product>) -> Self {
        let mut cart = Self::new();
        for p in entries {
            if p.amount > 0 && cart.find(p.id).is_none() {
                cart.items.push(p);
            }
        }
        cart
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Product> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: i64) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    pub fn amount_of(&self, product_id: i64) -> i64 {
        self.find(product_id).map(|p| p.amount).unwrap_or(0)
    }

    pub fn amounts_by_product(&self) -> HashMap<i64, i64> {
        self.items.iter().map(|p| (p.id, p.amount)).collect()
    }

    /// Sets the amount of an existing entry, or appends `product` with that
    /// amount when the id is not in the cart yet.
    pub fn upsert(&mut self, mut product: Product, amount: i64) {
        match self.items.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => existing.amount = amount,
            None => {
                product.amount = amount;
                self.items.push(product);
            }
        }
    }

    /// Returns false when the id is not in the cart.
    pub fn set_amount(&mut self, product_id: i64, amount: i64) -> bool {
        match self.items.iter_mut().find(|p| p.id == product_id) {
            Some(existing) => {
                existing.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: i64) -> Option<Product> {
        let idx = self.items.iter().position(|p| p.id == product_id)?;
        Some(self.items.remove(idx))
    }
}
