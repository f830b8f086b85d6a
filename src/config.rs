use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    /// Base URL of the catalog API serving `/products` and `/stock`.
    pub api_url: String,
    pub storage_path: PathBuf,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    from_vars(|key| env::var(key).ok())
}

/// Builds settings from a variable lookup; unset or unparseable values fall back to defaults.
pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Settings {
    let host = var("HOST")
        .unwrap_or_else(|| "127.0.0.1".to_string());

    let port = var("PORT")
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(3000);

    let api_url = var("API_URL")
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "http://localhost:3333".to_string());

    let storage_path = var("STORAGE_PATH")
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("storage/local_storage.json"));

    Settings {
        host,
        port,
        api_url,
        storage_path,
    }
}
