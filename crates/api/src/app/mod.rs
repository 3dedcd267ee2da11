//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the fetch/derive orchestration each handler calls
//! - `routes/`: HTTP routes + handlers (one file per entity area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use ledgerdash_store::DataSource;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around a backing store.
pub fn build_app(source: Arc<dyn DataSource>) -> Router {
    let services = Arc::new(services::AppServices::new(source));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
