//! REST surface shared by every resource
//!
//! Health checks, JSON bodies for routing failures, request tracing and CORS.

use super::entity_registry::EntityRegistry;
use crate::core::ApiError;
use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Builds the public router around the registered entities
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Entity routes from `registry`
    /// - `custom_routes`, merged as given
    /// - A JSON 404 for any other path
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>, cors: bool) -> Router {
        let app = custom_routes
            .into_iter()
            .fold(
                Self::health_routes().merge(registry.build_routes()),
                |app, routes| app.merge(routes),
            )
            .fallback(path_not_found);

        let app = if cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        };

        app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check).fallback(method_not_allowed))
            .route("/healthz", get(Self::health_check).fallback(method_not_allowed))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "grubdash"
        }))
    }
}

/// Method fallback for known paths
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, path = uri.path(), "method not allowed");
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Router fallback for unknown paths
pub async fn path_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = uri.path(), "path not found");
    ApiError::PathNotFound {
        path: uri.path().to_string(),
    }
}
