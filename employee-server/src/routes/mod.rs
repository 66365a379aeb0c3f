//! 应用路由与中间件装配

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method, Uri, header};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, ServerError, ServerState};
use crate::server::middleware;
use crate::utils::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Employee API
        .merge(api::employees::router())
        // Health API
        .merge(api::health::router())
        .fallback(fallback)
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by in-process tests. Fails if the configured
/// CORS origin is not a valid header value.
pub fn build_app(state: &ServerState) -> Result<Router<ServerState>, ServerError> {
    let cors = cors_layer(&state.config)?;

    let app = build_router()
        // CORS - single configured origin
        .layer(cors)
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response (inside the layer that sets it)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // In-flight request limit, shared by all routes
        .layer(GlobalConcurrencyLimitLayer::new(
            state.config.max_connections.max(1),
        ));

    Ok(app)
}

fn cors_layer(config: &Config) -> Result<CorsLayer, ServerError> {
    let origin = HeaderValue::from_str(&config.cors_origin).map_err(|e| {
        ServerError::Config(format!("Invalid CORS_ORIGIN '{}': {}", config.cors_origin, e))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]))
}

/// Unknown routes answer with the JSON envelope
async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
