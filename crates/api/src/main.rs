use std::sync::Arc;

use ledgerdash_store::InMemoryDataSource;

#[tokio::main]
async fn main() {
    ledgerdash_observability::init();

    let addr = std::env::var("LEDGERDASH_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // Dev server runs against the in-memory store; a remote backend plugs in
    // by passing a different `DataSource` here.
    let source = Arc::new(InMemoryDataSource::new());
    let app = ledgerdash_api::app::build_app(source);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
