//! Prometheus metrics, served on their own port.

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::Duration;

const PREFIX: &str = "portfolio";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "HTTP requests by route and status"),
        &["method", "route", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "Time to answer an HTTP request"
        )
        .buckets(vec![0.005, 0.025, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["method", "route"]
    ).expect("Failed to create http_request_duration_seconds metric");

    pub static ref STORE_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_store_requests_total"), "Backend calls by operation and outcome"),
        &["operation", "collection", "outcome"]
    ).expect("Failed to create store_requests_total metric");

    pub static ref STORE_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_store_request_duration_seconds"),
            "Backend call latency"
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["operation", "collection"]
    ).expect("Failed to create store_request_duration_seconds metric");

    pub static ref CONTACT_SUBMISSIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_contact_submissions_total"), "Contact form submissions"),
        &["outcome"]
    ).expect("Failed to create contact_submissions_total metric");
}

/// Registers every metric. Safe to call more than once.
pub fn init_metrics() {
    let collectors: [Box<dyn prometheus::core::Collector>; 5] = [
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
        Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()),
        Box::new(STORE_REQUESTS_TOTAL.clone()),
        Box::new(STORE_REQUEST_DURATION_SECONDS.clone()),
        Box::new(CONTACT_SUBMISSIONS_TOTAL.clone()),
    ];
    for collector in collectors {
        // AlreadyReg on repeated calls
        let _ = REGISTRY.register(collector);
    }

    tracing::info!("Metrics registered");
}

pub fn record_http_request(method: &str, route: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, route, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route])
        .observe(duration.as_secs_f64());
}

/// Counts one backend call, labelled "ok" or "error" after `result`.
pub fn record_store_request<T, E>(
    operation: &str,
    collection: &str,
    result: &Result<T, E>,
    duration: Duration,
) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    STORE_REQUESTS_TOTAL
        .with_label_values(&[operation, collection, outcome])
        .inc();
    STORE_REQUEST_DURATION_SECONDS
        .with_label_values(&[operation, collection])
        .observe(duration.as_secs_f64());
}

/// `outcome` is one of "sent", "failed" or "duplicate".
pub fn record_contact_submission(outcome: &str) {
    CONTACT_SUBMISSIONS_TOTAL.with_label_values(&[outcome]).inc();
}

pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
    }

    (
        [(CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}
