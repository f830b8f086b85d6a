use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::models::{Product, Stock};

/// Client for the read-only catalog API (`/products`, `/stock`).
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn stock(&self, product_id: i64) -> Result<Stock, String> {
        self.get_json(&format!("/stock/{product_id}")).await
    }

    pub async fn product(&self, product_id: i64) -> Result<Product, String> {
        self.get_json(&format!("/products/{product_id}")).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, String> {
        self.get_json("/products").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("GET {path} failed: {status} {body}"));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }
}
