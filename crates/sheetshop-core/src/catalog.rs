use serde::{Deserialize, Serialize};

/// One product row from a shop's item sheet.
///
/// Serialized field names match the sheet's header row so that clients see
/// the same column names the shop owner edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "Rate")]
    pub rate: f64,
    #[serde(rename = "Discount")]
    pub discount: f64,
    pub combo_quantity: i64,
    pub combo_discount: f64,
    #[serde(rename = "Category")]
    pub category: String,
    /// Whether the item is currently in stock.
    #[serde(rename = "Stock")]
    pub in_stock: bool,
    pub tags: Vec<String>,
    #[serde(default)]
    pub image1: String,
    #[serde(default)]
    pub image2: String,
    #[serde(default)]
    pub video: String,
}

/// Body of `GET /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<CatalogEntry>,
}
