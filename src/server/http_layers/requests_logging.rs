//! Request logging middleware

use super::super::state::ServerState;
use crate::server::metrics::record_http_request;
use axum::extract::{MatchedPath, State};
use axum::{
    body::Body,
    http::{header::CONTENT_LENGTH, HeaderMap, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl RequestsLoggingLevel {
    /// Parses the lowercase names used on the command line and in config files.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "path" => Some(Self::Path),
            "headers" => Some(Self::Headers),
            "body" => Some(Self::Body),
            _ => None,
        }
    }
}

const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

/// Declared body size, or why it cannot be known up front.
fn declared_length(headers: &HeaderMap) -> Result<usize, &'static str> {
    headers
        .get(CONTENT_LENGTH)
        .ok_or("no content-length")?
        .to_str()
        .map_err(|_| "unreadable content-length")?
        .parse()
        .map_err(|_| "non-numeric content-length")
}

fn log_headers(label: &str, headers: &HeaderMap) {
    info!("  {} headers:", label);
    for (name, value) in headers {
        info!("    {}: {:?}", name, value);
    }
}

/// Buffers a small body so it can be logged, then hands it back intact.
async fn log_body(label: &str, headers: &HeaderMap, body: Body) -> Result<Body, StatusCode> {
    let size = match declared_length(headers) {
        Ok(size) => size,
        Err(reason) => {
            info!("  {} body not logged: {}", label, reason);
            return Ok(body);
        }
    };

    if size >= MAX_LOGGABLE_BODY_LENGTH {
        info!(
            "  {} body not logged: {:#} is too big",
            label,
            byte_unit::Byte::from(size)
        );
        return Ok(body);
    }

    let bytes = axum::body::to_bytes(body, size).await.map_err(|err| {
        error!("Failed to buffer {} body: {:?}", label, err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    info!("  {} body:\n{}", label, String::from_utf8_lossy(&bytes));
    Ok(Body::from(bytes))
}

/// Logs each request at the configured level and records it in the HTTP
/// metrics under its route template.
pub async fn log_requests(
    State(state): State<ServerState>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let level = &state.config.requests_logging_level;
    let start = Instant::now();

    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or("unmatched", MatchedPath::as_str)
        .to_string();

    if *level > RequestsLoggingLevel::None {
        info!(">>> {} {}", method, request.uri());
    }

    let request = if *level >= RequestsLoggingLevel::Headers {
        log_headers("Req", request.headers());
        if *level >= RequestsLoggingLevel::Body {
            let (parts, body) = request.into_parts();
            match log_body("Req", &parts.headers, body).await {
                Ok(body) => Request::from_parts(parts, body),
                Err(status) => return status.into_response(),
            }
        } else {
            request
        }
    } else {
        request
    };

    let mut response = next.run(request).await;

    if *level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
        if *level >= RequestsLoggingLevel::Body {
            let (parts, body) = response.into_parts();
            response = match log_body("Resp", &parts.headers, body).await {
                Ok(body) => Response::from_parts(parts, body),
                Err(status) => return status.into_response(),
            };
        }
    }

    let status = response.status().as_u16();
    let elapsed = start.elapsed();
    if *level > RequestsLoggingLevel::None {
        info!("<<< {} {} -> {} ({}ms)", method, route, status, elapsed.as_millis());
    }
    record_http_request(&method, &route, status, elapsed);

    response
}
