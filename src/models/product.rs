use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,

    // quantity held in the cart; the catalog API omits it
    #[serde(default)]
    pub amount: i64,
}
