use std::sync::Arc;

use {
    axum::{
        Json, Router,
        routing::{delete, get},
    },
    tokio::net::TcpListener,
    tracing::info,
};

use crate::{routes, state::GatewayState};

/// Axum state shared by all admin routes.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayState>,
}

/// Build the admin API router.
pub fn build_admin_app(gateway: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/channel-config/options", get(routes::options))
        .route(
            "/api/bots/{bot_id}/channel-configs",
            get(routes::list).post(routes::submit),
        )
        .route("/api/channel-configs/{id}", delete(routes::remove))
        .route("/api/connectors/{source}/fields", get(routes::connector_fields))
        .with_state(AppState { gateway })
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Bind and serve the admin API until the process exits.
pub async fn serve(gateway: Arc<GatewayState>) -> anyhow::Result<()> {
    let addr = format!(
        "{}:{}",
        gateway.config.server.bind, gateway.config.server.port
    );
    let app = build_admin_app(gateway);
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "admin gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
