use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(
            target: "metrics",
            method = %method,
            path = %path,
            status,
            latency_ms = %latency_ms,
            request_id = %request_id,
            "request_failed"
        );
    } else {
        info!(
            target: "metrics",
            method = %method,
            path = %path,
            status,
            latency_ms = %latency_ms,
            request_id = %request_id,
            "request_completed"
        );
    }

    response
}
