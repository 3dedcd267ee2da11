use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;

use ledgerdash_core::{CustomerId, InvoiceId, InvoiceStatus};
use ledgerdash_store::{InvoicePatch, NewInvoice};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/latest", get(latest_invoices))
        .route(
            "/:id",
            get(get_invoice).patch(update_invoice).delete(delete_invoice),
        )
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(s) => match s.parse::<InvoiceStatus>() {
            Ok(v) => Some(v),
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_status", e.to_string()),
        },
    };

    let page = params.page.unwrap_or(1);
    match services.invoice_page(&params.query, page, status).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(dto::page_to_json(&rows, dto::invoice_row_to_json)),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn latest_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.latest_invoices().await {
        Ok(rows) => {
            let items = rows.iter().map(dto::invoice_row_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid invoice id"),
    };
    // Edit forms need the record to pre-populate: missing here is a hard 404,
    // unlike the tolerant list join.
    match services.get_invoice(&id).await {
        Ok(Some(invoice)) => (StatusCode::OK, Json(invoice)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "invoice not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateInvoiceRequest>,
) -> axum::response::Response {
    let customer_id: CustomerId = match body.customer_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id"),
    };
    let status: InvoiceStatus = match body.status.parse() {
        Ok(v) => v,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_status", e.to_string()),
    };
    let date = match parse_optional_date(body.date.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if body.amount <= 0 {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_amount", "amount must be positive");
    }

    let new = NewInvoice {
        customer_id,
        amount: body.amount,
        status,
        date,
    };
    match services.create_invoice(new).await {
        Ok(invoice) => (StatusCode::CREATED, Json(invoice)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateInvoiceRequest>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid invoice id"),
    };
    let customer_id = match body.customer_id.as_deref().map(str::parse::<CustomerId>).transpose() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id"),
    };
    let status = match body.status.as_deref().map(str::parse::<InvoiceStatus>).transpose() {
        Ok(v) => v,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_status", e.to_string()),
    };
    let date = match parse_optional_date(body.date.as_deref()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Some(amount) = body.amount {
        if amount <= 0 {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_amount", "amount must be positive");
        }
    }

    let patch = InvoicePatch {
        customer_id,
        amount: body.amount,
        status,
        date,
    };
    match services.update_invoice(&id, patch).await {
        Ok(invoice) => (StatusCode::OK, Json(invoice)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid invoice id"),
    };
    match services.delete_invoice(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, axum::response::Response> {
    match s {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| {
                errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_date",
                    "date must be ISO 8601 (YYYY-MM-DD)",
                )
            }),
    }
}
