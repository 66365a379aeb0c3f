//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含请求 ID、路由、状态码和耗时

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::routes::REQUEST_ID_HEADER;

/// 请求日志中间件
///
/// 记录请求开始和结束，包含以下信息：
/// - 请求 ID (x-request-id)
/// - HTTP 方法和路由
/// - 响应状态码
/// - 请求延迟 (毫秒)
///
/// 4xx/5xx 以 warn 级别记录
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    // 优先使用路由模板，避免把 id 写进路由字段
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.clone());

    info!(
        request_id = %request_id,
        method = %method,
        route = %route,
        uri = %uri,
        "Request started"
    );

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status,
            latency_ms = %latency_ms,
            "Request completed with server error"
        );
    } else if response.status().is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status,
            latency_ms = %latency_ms,
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status,
            latency_ms = %latency_ms,
            "Request completed"
        );
    }

    response
}
