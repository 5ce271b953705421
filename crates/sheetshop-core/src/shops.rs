use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// A shop's profile row from the customers sheet.
///
/// `sheet_link` and `subscription_date` are internal to the profile cache and
/// are never part of a public response; see [`ShopCatalogResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopProfile {
    #[serde(rename = "BusinessName")]
    pub business_name: String,
    #[serde(rename = "BusinessType")]
    pub business_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "MobileNo")]
    pub mobile_no: String,
    #[serde(rename = "Pincode")]
    pub pincode: String,
    #[serde(rename = "MapLocation")]
    pub map_location: String,
    /// Cache key. Unique per shop.
    #[serde(rename = "ShopUsername")]
    pub shop_username: String,
    #[serde(rename = "ConvenienceFee")]
    pub convenience_fee: f64,
    #[serde(rename = "Description", default)]
    pub description: String,
    /// URL of the shop's item sheet.
    #[serde(rename = "SheetLink", default)]
    pub sheet_link: String,
    #[serde(rename = "SubscriptionDate", default)]
    pub subscription_date: String,
}

/// Body of `GET /getitems`: the public half of a [`ShopProfile`] plus its
/// live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCatalogResponse {
    #[serde(rename = "BusinessName")]
    pub business_name: String,
    #[serde(rename = "BusinessType")]
    pub business_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "MobileNo")]
    pub mobile_no: String,
    #[serde(rename = "Pincode")]
    pub pincode: String,
    #[serde(rename = "MapLocation")]
    pub map_location: String,
    #[serde(rename = "ShopUsername")]
    pub shop_username: String,
    #[serde(rename = "ConvenienceFee")]
    pub convenience_fee: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Items")]
    pub items: Vec<CatalogEntry>,
}

impl ShopCatalogResponse {
    /// Copies the public profile fields and attaches `items`.
    #[must_use]
    pub fn from_profile(profile: &ShopProfile, items: Vec<CatalogEntry>) -> Self {
        Self {
            business_name: profile.business_name.clone(),
            business_type: profile.business_type.clone(),
            address: profile.address.clone(),
            mobile_no: profile.mobile_no.clone(),
            pincode: profile.pincode.clone(),
            map_location: profile.map_location.clone(),
            shop_username: profile.shop_username.clone(),
            convenience_fee: profile.convenience_fee,
            description: profile.description.clone(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ShopProfile {
        ShopProfile {
            business_name: "Anna Stores".to_string(),
            business_type: "Grocery".to_string(),
            address: "12 Market Road".to_string(),
            mobile_no: "9876543210".to_string(),
            pincode: "600001".to_string(),
            map_location: "13.08,80.27".to_string(),
            shop_username: "anna".to_string(),
            convenience_fee: 12.5,
            description: "Fresh daily".to_string(),
            sheet_link: "https://docs.google.com/spreadsheets/d/items/edit".to_string(),
            subscription_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn shop_catalog_response_omits_internal_fields() {
        let response = ShopCatalogResponse::from_profile(&profile(), Vec::new());
        let json = serde_json::to_value(&response).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(!obj.contains_key("SheetLink"));
        assert!(!obj.contains_key("SubscriptionDate"));
        assert_eq!(json["ShopUsername"], "anna");
        assert_eq!(json["ConvenienceFee"], 12.5);
        assert!(json["Items"].as_array().expect("items").is_empty());
    }
}
