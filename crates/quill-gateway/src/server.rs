// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Mounts every route a plugin definition exposes, plus an unauthenticated
//! `/health` endpoint for supervisors.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use quill_core::{QuillError, RouteMethod};
use quill_plugin::PluginDefinition;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Gateway server configuration (mirrors `GatewayConfig` from quill-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
struct HealthResponse {
    /// Health status string.
    status: String,
    /// Binary version.
    version: String,
}

/// Build the router for a plugin definition.
///
/// Each plugin route becomes an axum route serving the handler's JSON value;
/// `/health` is always mounted.
pub fn build_router(plugin: &PluginDefinition) -> Router {
    let mut app = Router::new().route("/health", get(get_health));

    for route in &plugin.routes {
        let handler = Arc::clone(&route.handler);
        let serve = move || {
            let handler = Arc::clone(&handler);
            async move { Json(handler()) }
        };
        tracing::debug!(name = %route.name, path = %route.path, method = %route.method, "mounting plugin route");
        app = match route.method {
            RouteMethod::Get => app.route(&route.path, get(serve)),
            RouteMethod::Post => app.route(&route.path, post(serve)),
        };
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until the task is dropped.
pub async fn start_server(
    config: &ServerConfig,
    plugin: &PluginDefinition,
) -> Result<(), QuillError> {
    let app = build_router(plugin);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| QuillError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| QuillError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use quill_config::model::StarterConfig;
    use quill_starter::starter_plugin;
    use tower::ServiceExt;

    use super::*;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("should read body");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn helloworld_route_returns_fixed_payload() {
        let plugin = starter_plugin(&StarterConfig::default());
        let app = build_router(&plugin);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/helloworld")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Hello World!" })
        );
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        let plugin = starter_plugin(&StarterConfig::default());
        let app = build_router(&plugin);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let plugin = starter_plugin(&StarterConfig::default());
        let app = build_router(&plugin);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
