//! Cache-Control middleware

use axum::{
    body::Body,
    extract::State,
    http::{header::CACHE_CONTROL, HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};

/// Adds `Cache-Control: max-age=<sec>` to successful responses, `no-store`
/// to everything else so failed reads are never cached downstream.
pub async fn http_cache(
    State(max_age_sec): State<usize>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let mut response = next.run(request).await.into_response();

    let value = if response.status().is_success() && max_age_sec > 0 {
        HeaderValue::from_str(&format!("max-age={}", max_age_sec))
            .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
    } else {
        HeaderValue::from_static("no-store")
    };
    response.headers_mut().insert(CACHE_CONTROL, value);

    response
}
