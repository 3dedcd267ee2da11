use axum::{routing::get, Router};

pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod system;

/// Router for all data endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard::overview))
        .nest("/invoices", invoices::router())
        .nest("/customers", customers::router())
}
