use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use sheetshop_core::{ItemsResponse, ShopCatalogResponse};

use crate::cache::Lookup;
use crate::middleware::RequestId;

use super::{map_fetch_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ItemsQuery {
    pub sheet_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ShopItemsQuery {
    pub shop_username: Option<String>,
}

/// `GET /items?sheet_url=...`: read any item sheet directly, bypassing the cache.
pub(super) async fn get_items(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let Some(sheet_url) = query.sheet_url else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter sheet_url is required",
        ));
    };

    let mapped = state
        .sheets
        .fetch_catalog(&sheet_url)
        .await
        .map_err(|e| map_fetch_error(req_id.0.clone(), "Failed to fetch sheet", &e))?;

    Ok(Json(ItemsResponse {
        items: mapped.records,
    }))
}

/// `GET /getitems?shop_username=...`: cached profile plus its live catalog.
pub(super) async fn get_items_for_shop(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ShopItemsQuery>,
) -> Result<Json<ShopCatalogResponse>, ApiError> {
    let Some(shop_username) = query.shop_username else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter shop_username is required",
        ));
    };

    let profile = match state.cache.lookup(&shop_username).await {
        Lookup::Found(profile) => profile,
        Lookup::CacheEmpty => {
            return Err(ApiError::new(
                req_id.0,
                "cache_empty",
                "Customer cache is empty. Call /updateCustomers first.",
            ));
        }
        Lookup::Missing => {
            return Err(ApiError::new(
                req_id.0,
                "not_found",
                format!("No customer found for ShopUsername '{shop_username}'"),
            ));
        }
    };

    if profile.sheet_link.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "missing_sheet_link",
            format!("No SheetLink configured for ShopUsername '{shop_username}'"),
        ));
    }

    let mapped = state
        .sheets
        .fetch_catalog(&profile.sheet_link)
        .await
        .map_err(|e| map_fetch_error(req_id.0.clone(), "Failed to fetch items sheet", &e))?;

    tracing::debug!(
        shop_username = %profile.shop_username,
        items = mapped.records.len(),
        "served shop catalog"
    );

    Ok(Json(ShopCatalogResponse::from_profile(
        &profile,
        mapped.records,
    )))
}
