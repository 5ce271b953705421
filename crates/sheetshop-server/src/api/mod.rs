mod customers;
mod items;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sheetshop_sheets::{SheetClient, SheetError};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::ShopCache;
use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub sheets: SheetClient,
    pub cache: Arc<ShopCache>,
    /// Sheet read by `POST /updateCustomers`.
    pub customers_sheet_url: Arc<str>,
}

impl AppState {
    pub fn new(sheets: SheetClient, customers_sheet_url: impl Into<Arc<str>>) -> Self {
        Self {
            sheets,
            cache: Arc::new(ShopCache::new()),
            customers_sheet_url: customers_sheet_url.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    cached_shops: usize,
    last_refreshed_at: Option<DateTime<Utc>>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "fetch_failed" | "cache_empty" | "missing_sheet_link" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Maps a sheet fetch failure to a `fetch_failed` (400) error whose message is
/// `"{context}: {error}"`.
pub(super) fn map_fetch_error(request_id: String, context: &str, error: &SheetError) -> ApiError {
    tracing::warn!(error = %error, "{context}");
    ApiError::new(request_id, "fetch_failed", format!("{context}: {error}"))
}

/// Allows exactly one browser origin, with credentials, mirroring whatever
/// methods and headers that origin asks for.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn build_cors(origin: &str) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/updateCustomers", post(customers::update_customers))
        .route("/items", get(items::get_items))
        .route("/getitems", get(items::get_items_for_shop))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            cached_shops: state.cache.len().await,
            last_refreshed_at: state.cache.last_refreshed().await,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
