mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use origin_access_filter::OriginFilter;
use origin_access_filter::middleware::origin_filter_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("origin_access_filter=debug,info")),
        )
        .init();

    let filter = Arc::new(OriginFilter::from_env()?);

    let app = Router::new()
        .route("/api/collections/orders", get(routes::list_orders))
        .route("/api/collections/dishes", get(routes::list_dishes))
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(
            filter,
            origin_filter_middleware,
        ));

    let addr: SocketAddr = "127.0.0.1:1111".parse()?;
    tracing::info!(%addr, "axum demo listening; set ALLOWED_ORIGINS to allow browser origins");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
