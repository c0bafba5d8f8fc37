use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::{Form, State},
    http::{StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::assets::bundled_assets;
use super::{http_cache, log_requests, metrics::metrics_handler, state::*, ServerConfig};
use crate::pages::{
    load_about, load_contact, load_home, load_projects, submit_contact_form, AboutPage,
    ContactForm, ContactPage, HomePage, Notification, ProjectsPage, SubmissionOutcome,
};
use crate::render::{render_about, render_contact, render_home, render_not_found, render_projects};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

#[derive(Serialize)]
struct SubmissionResponse {
    notification: Notification,
    form: ContactForm,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

// =============================================================================
// HTML pages
// =============================================================================

async fn home_page(
    State(store): State<GuardedDataStore>,
    State(config): State<ServerConfig>,
) -> Html<String> {
    let home = load_home(store.as_ref(), &config.default_profile_image).await;
    Html(render_home(&home))
}

async fn projects_page(State(store): State<GuardedDataStore>) -> Html<String> {
    Html(render_projects(&load_projects(store.as_ref()).await))
}

async fn about_page(State(store): State<GuardedDataStore>) -> Html<String> {
    Html(render_about(&load_about(store.as_ref()).await))
}

async fn contact_page(
    State(store): State<GuardedDataStore>,
    State(gate): State<GuardedSubmissionGate>,
) -> Html<String> {
    let page = load_contact(store.as_ref(), &gate, ContactForm::blank(), None).await;
    Html(render_contact(&page))
}

async fn post_contact(
    State(store): State<GuardedDataStore>,
    State(gate): State<GuardedSubmissionGate>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let outcome = submit_contact_form(store.as_ref(), &gate, form).await;
    let notification = outcome.notification();
    let page = load_contact(store.as_ref(), &gate, outcome.into_form(), Some(notification)).await;
    Html(render_contact(&page))
}

async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found(uri.path())))
}

// =============================================================================
// JSON API
// =============================================================================

async fn get_status(State(state): State<ServerState>) -> Json<ServerStats> {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    })
}

async fn get_home(
    State(store): State<GuardedDataStore>,
    State(config): State<ServerConfig>,
) -> Json<HomePage> {
    Json(load_home(store.as_ref(), &config.default_profile_image).await)
}

async fn get_projects(State(store): State<GuardedDataStore>) -> Json<ProjectsPage> {
    Json(load_projects(store.as_ref()).await)
}

async fn get_about(State(store): State<GuardedDataStore>) -> Json<AboutPage> {
    Json(load_about(store.as_ref()).await)
}

async fn get_contact(
    State(store): State<GuardedDataStore>,
    State(gate): State<GuardedSubmissionGate>,
) -> Json<ContactPage> {
    Json(load_contact(store.as_ref(), &gate, ContactForm::blank(), None).await)
}

async fn post_message(
    State(store): State<GuardedDataStore>,
    State(gate): State<GuardedSubmissionGate>,
    Json(form): Json<ContactForm>,
) -> Response {
    let outcome = submit_contact_form(store.as_ref(), &gate, form).await;
    let status = match outcome {
        SubmissionOutcome::Sent(_) => StatusCode::CREATED,
        SubmissionOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        SubmissionOutcome::AlreadySending(_) => StatusCode::CONFLICT,
    };
    let body = SubmissionResponse {
        notification: outcome.notification(),
        form: outcome.into_form(),
    };
    (status, Json(body)).into_response()
}

pub fn make_app(config: ServerConfig, store: GuardedDataStore) -> Router {
    let state = ServerState::new(config.clone(), store);

    let page_routes: Router = Router::new()
        .route("/", get(home_page))
        .route("/projects", get(projects_page))
        .route("/about", get(about_page))
        .route("/contact", get(contact_page).post(post_contact))
        .with_state(state.clone());

    let api_read_routes: Router = Router::new()
        .route("/home", get(get_home))
        .route("/projects", get(get_projects))
        .route("/about", get(get_about))
        .route("/contact", get(get_contact))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    // Uncached: uptime changes on every call
    let api_uncached_routes: Router = Router::new()
        .route("/status", get(get_status))
        .route("/contact/messages", post(post_message))
        .with_state(state.clone());

    let mut app: Router = page_routes
        .nest("/api/v1", api_read_routes.merge(api_uncached_routes))
        .fallback(not_found);

    app = match &config.assets_dir {
        Some(assets_dir) => app.nest_service(
            "/assets",
            ServeDir::new(assets_dir).fallback(bundled_assets()),
        ),
        None => app.nest("/assets", bundled_assets()),
    };

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, store: GuardedDataStore) -> Result<()> {
    let app = make_app(config.clone(), store);

    let metrics_addr = format!("{}:{}", config.host, config.metrics_port);
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
        .await
        .with_context(|| format!("Failed to bind metrics server to {}", metrics_addr))?;
    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server stopped: {}", err);
        }
    });
    info!("Metrics available at http://{}/metrics", metrics_addr);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;
    info!("Ready to serve at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{RequestsLoggingLevel, DEFAULT_PROFILE_IMAGE};
    use crate::store::InMemoryDataStore;
    use axum::{body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn test_config() -> ServerConfig {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        }
    }

    fn app_with(store: InMemoryDataStore) -> Router {
        make_app(test_config(), Arc::new(store))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn uptime_is_formatted_with_days() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0d 00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 01:01:01");
    }

    #[tokio::test]
    async fn serves_every_page() {
        let app = app_with(InMemoryDataStore::default());

        for route in ["/", "/projects", "/about", "/contact"] {
            let request = Request::builder().uri(route).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "route {}", route);

            let html = body_text(response).await;
            assert!(html.starts_with("<!DOCTYPE html>"), "route {}", route);
        }
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found_page() {
        let app = app_with(InMemoryDataStore::default());

        for route in ["/auth", "/nope"] {
            let request = Request::builder().uri(route).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert!(body_text(response).await.contains("Page not found"));
        }
    }

    #[tokio::test]
    async fn failing_store_still_serves_pages() {
        let store = InMemoryDataStore::default();
        for collection in ["skills", "education", "contacts", "projects"] {
            store.fail_collection(collection);
        }
        store.fail_bucket("profile-pictures");
        let app = app_with(store);

        for route in ["/", "/projects", "/about", "/contact"] {
            let request = Request::builder().uri(route).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "route {}", route);
        }
    }

    #[tokio::test]
    async fn api_reads_carry_cache_header() {
        let app = app_with(InMemoryDataStore::default());

        let request = Request::builder()
            .uri("/api/v1/projects")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["cache-control"], "max-age=60");
    }

    #[tokio::test]
    async fn status_is_never_cached() {
        let app = app_with(InMemoryDataStore::default());

        let request = Request::builder()
            .uri("/api/v1/status")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("cache-control").is_none());
    }

    async fn get_asset(app: Router, path: &str) -> Response {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn bundled_assets_served_without_assets_dir() {
        let app = app_with(InMemoryDataStore::default());

        let response = get_asset(app.clone(), DEFAULT_PROFILE_IMAGE).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "image/svg+xml");
        assert!(body_text(response).await.contains("<svg"));

        let response = get_asset(app.clone(), "/assets/site.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/css"));

        let response = get_asset(app, "/assets/missing.png").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assets_dir_files_win_over_bundled_ones() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.css"), "body { color: red; }").unwrap();
        std::fs::write(dir.path().join("photo.webp"), b"webp").unwrap();
        let config = ServerConfig {
            assets_dir: Some(dir.path().to_path_buf()),
            ..test_config()
        };
        let app = make_app(config, Arc::new(InMemoryDataStore::default()));

        let response = get_asset(app.clone(), "/assets/site.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "body { color: red; }");

        let response = get_asset(app.clone(), "/assets/photo.webp").await;
        assert_eq!(response.status(), StatusCode::OK);

        // Not in the directory, still available from the binary
        let response = get_asset(app, DEFAULT_PROFILE_IMAGE).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn form_post_renders_outcome() {
        let store = Arc::new(InMemoryDataStore::default());
        let app = make_app(test_config(), store.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "form_id=abc&name=Alice&email=a%40example.com&message=Hello",
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Message sent!"));
        assert!(html.contains(r#"name="name" type="text" value="""#));
        assert_eq!(store.rows("messages").len(), 1);
    }
}
