use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// The overview page: card totals, latest invoices, revenue chart data.
pub async fn overview(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dashboard().await {
        Ok(data) => (StatusCode::OK, Json(dto::dashboard_to_json(&data))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
