// rest/mod.rs — Public REST API server.
//
// Axum HTTP server for the account endpoints (local only unless the bind
// address is widened). The task board is client-held state and deliberately
// has no endpoint here.
//
// Endpoints:
//   GET  /                  (liveness text)
//   GET  /api/health
//   POST /api/auth/register
//   POST /api/auth/login

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Liveness (no auth)
        .route("/", get(routes::health::root))
        .route("/api/health", get(routes::health::health))
        // Accounts
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        // The dashboard is served from a different origin during development.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
