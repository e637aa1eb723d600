use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let header = req
        .headers()
        .get("x-request-id")
        .cloned()
        .filter(|v| v.to_str().is_ok_and(|s| !s.is_empty()));

    let request_id = match header {
        Some(value) => value,
        // A UUID is always a valid header value
        None => HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
    };

    req.headers_mut().insert("x-request-id", request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert("x-request-id", request_id);

    response
}
