//! Library entrypoint for RocketShoes.
//!
//! Integration tests under `tests/` import the app state, routers,
//! controllers and services from here.

pub mod config;
pub mod errors;
pub mod models;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

/// Shared context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub api: services::api::ApiClient,
    pub cart: services::cart_service::CartStore,
}

impl AppState {
    /// Wires the catalog client, storage and cart store from settings.
    pub async fn build(settings: config::Settings) -> Result<Self, String> {
        let hbs = templates::build_handlebars()?;
        let api = services::api::ApiClient::new(settings.api_url.clone());
        let storage = services::storage::LocalStorage::new(settings.storage_path.clone());
        let notifier = services::notifier::Notifier::new(64);
        let cart = services::cart_service::CartStore::load(api.clone(), storage, notifier).await;

        Ok(Self {
            hbs,
            settings,
            api,
            cart,
        })
    }
}
