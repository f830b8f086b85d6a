#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http_body_util::BodyExt;
use rocketshoes::{
    config::Settings,
    models::{Product, Stock},
    services::{
        api::ApiClient,
        cart_service::CartStore,
        notifier::Notifier,
        storage::{LocalStorage, CART_KEY},
    },
    AppState,
};

/// In-process stand-in for the catalog API.
#[derive(Clone, Default)]
pub struct Catalog {
    stock: Arc<Mutex<HashMap<i64, i64>>>,
    products: Arc<Mutex<Vec<Product>>>,
    broken: Arc<Mutex<HashSet<i64>>>,
}

impl Catalog {
    pub fn with_products() -> Self {
        let catalog = Self::default();
        catalog.add_product(product(1, "Tênis de Caminhada Leve Confortável", 179.9), 3);
        catalog.add_product(product(2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9), 5);
        catalog.add_product(product(3, "Tênis Adidas Duramo Lite 2.0", 219.9), 2);
        catalog.add_product(product(5, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9), 3);
        catalog
    }

    pub fn add_product(&self, p: Product, stock: i64) {
        self.stock.lock().unwrap().insert(p.id, stock);
        self.products.lock().unwrap().push(p);
    }

    pub fn set_stock(&self, id: i64, amount: i64) {
        self.stock.lock().unwrap().insert(id, amount);
    }

    /// Makes `/stock/{id}` and `/products/{id}` answer 500.
    pub fn break_product(&self, id: i64) {
        self.broken.lock().unwrap().insert(id);
    }

    /// Keeps the stock entry but drops the product record.
    pub fn forget_product(&self, id: i64) {
        self.products.lock().unwrap().retain(|p| p.id != id);
    }

    pub async fn serve(self) -> String {
        let app = Router::new()
            .route("/stock/:id", get(get_stock))
            .route("/products", get(get_products))
            .route("/products/:id", get(get_product))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }
}

async fn get_stock(State(c): State<Catalog>, UrlPath(id): UrlPath<i64>) -> Response {
    if c.broken.lock().unwrap().contains(&id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    match c.stock.lock().unwrap().get(&id) {
        Some(amount) => Json(Stock { id, amount: *amount }).into_response(),
        None => (StatusCode::NOT_FOUND, "{}").into_response(),
    }
}

async fn get_product(State(c): State<Catalog>, UrlPath(id): UrlPath<i64>) -> Response {
    if c.broken.lock().unwrap().contains(&id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    let found = c.products.lock().unwrap().iter().find(|p| p.id == id).cloned();
    match found {
        Some(p) => Json(serde_json::json!({
            "id": p.id,
            "title": p.title,
            "price": p.price,
            "image": p.image,
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "{}").into_response(),
    }
}

async fn get_products(State(c): State<Catalog>) -> Json<Vec<Product>> {
    Json(c.products.lock().unwrap().clone())
}

pub fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        image: format!("https://example.com/shoes/{id}.jpg"),
        amount: 0,
    }
}

pub fn in_cart(id: i64, amount: i64) -> Product {
    Product {
        amount,
        ..product(id, "Tênis", 100.0)
    }
}

/// Writes `entries` under the cart key, as a previous session would have.
pub async fn seed_cart(path: &Path, entries: &[Product]) {
    let storage = LocalStorage::new(path);
    storage
        .set_item(CART_KEY, serde_json::to_string(entries).unwrap())
        .await
        .unwrap();
}

pub async fn stored_cart(path: &Path) -> Option<Vec<Product>> {
    let raw = LocalStorage::new(path).get_item(CART_KEY).await.unwrap()?;
    Some(serde_json::from_str(&raw).unwrap())
}

pub async fn new_store(api_url: &str, path: &Path) -> CartStore {
    CartStore::load(ApiClient::new(api_url), LocalStorage::new(path), Notifier::new(16)).await
}

pub async fn test_state(api_url: &str, path: &Path) -> AppState {
    let settings = Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_url: api_url.to_string(),
        storage_path: path.to_path_buf(),
    };

    AppState::build(settings).await.expect("app state")
}

pub async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}
