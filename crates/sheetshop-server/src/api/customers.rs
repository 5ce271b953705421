use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_fetch_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct RefreshResponse {
    message: &'static str,
    count: usize,
    skipped: usize,
}

/// `POST /updateCustomers`: reload the shop profile cache from the customers sheet.
pub(super) async fn update_customers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let outcome = state
        .cache
        .refresh(&state.sheets, &state.customers_sheet_url)
        .await
        .map_err(|e| map_fetch_error(req_id.0.clone(), "Failed to fetch customers sheet", &e))?;

    Ok(Json(RefreshResponse {
        message: "Customers updated",
        count: outcome.count,
        skipped: outcome.skipped,
    }))
}
