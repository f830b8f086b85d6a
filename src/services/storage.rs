//! Namespaced key-value storage kept in a single JSON document on disk.
//!
//! Values are opaque strings, like browser local storage. Every write
//! replaces the whole document through a temp file + rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;

pub const CART_KEY: &str = "@RocketShoes:cart";

type Document = BTreeMap<String, String>;

#[derive(Clone)]
pub struct LocalStorage {
    path: Arc<PathBuf>,
    // serializes read-modify-write of the document
    write_lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        let doc = self.read_document().await?;
        Ok(doc.get(key).cloned())
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<(), String> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_document_for_write().await;
        doc.insert(key.to_string(), value);
        self.write_document(&doc).await
    }

    pub async fn remove_item(&self, key: &str) -> Result<(), String> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_document_for_write().await;
        if doc.remove(key).is_some() {
            self.write_document(&doc).await?;
        }
        Ok(())
    }

    async fn read_document(&self) -> Result<Document, String> {
        let raw = match fs::read_to_string(self.path.as_path()).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(format!("read {}: {e}", self.path.display())),
        };

        if raw.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&raw).map_err(|e| format!("parse {}: {e}", self.path.display()))
    }

    // A damaged document is replaced rather than blocking every later write.
    async fn read_document_for_write(&self) -> Document {
        self.read_document().await.unwrap_or_else(|e| {
            tracing::warn!("discarding unreadable storage document: {}", e);
            Document::new()
        })
    }

    async fn write_document(&self, doc: &Document) -> Result<(), String> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| format!("create {}: {e}", dir.display()))?;
        }

        let body = serde_json::to_string_pretty(doc).map_err(|e| e.to_string())?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .await
            .map_err(|e| format!("write {}: {e}", tmp.display()))?;
        fs::rename(&tmp, self.path.as_path())
            .await
            .map_err(|e| format!("rename {}: {e}", self.path.display()))?;

        Ok(())
    }
}
