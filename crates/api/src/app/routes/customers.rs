use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use ledgerdash_core::CustomerId;
use ledgerdash_store::{CustomerPatch, NewCustomer};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).patch(update_customer).delete(delete_customer),
        )
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let page = params.page.unwrap_or(1);
    match services.customer_page(&params.query, page).await {
        Ok(summaries) => (
            StatusCode::OK,
            Json(dto::page_to_json(&summaries, dto::customer_summary_to_json)),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id"),
    };
    match services.get_customer(&id).await {
        Ok(Some(customer)) => (StatusCode::OK, Json(customer)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "customer not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCustomerRequest>,
) -> axum::response::Response {
    if body.name.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_name", "name is required");
    }
    if body.email.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_email", "email is required");
    }

    let new = NewCustomer {
        name: body.name,
        email: body.email,
        image_url: body.image_url,
    };
    match services.create_customer(new).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCustomerRequest>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id"),
    };
    let patch = CustomerPatch {
        name: body.name,
        email: body.email,
        image_url: body.image_url,
    };
    match services.update_customer(&id, patch).await {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CustomerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id"),
    };
    match services.delete_customer(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
