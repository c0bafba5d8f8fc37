//! Assets compiled into the binary, served under `/assets` when the
//! configured assets directory does not provide them.

use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Router,
};

const SITE_CSS: &str = include_str!("../../assets/site.css");
const PROFILE_PHOTO_SVG: &str = include_str!("../../assets/profile-photo.svg");

async fn site_css() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, "max-age=3600"),
        ],
        SITE_CSS,
    )
}

async fn profile_photo() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (CACHE_CONTROL, "max-age=3600"),
        ],
        PROFILE_PHOTO_SVG,
    )
}

/// Routes relative to the `/assets` mount point.
pub fn bundled_assets() -> Router {
    Router::new()
        .route("/site.css", get(site_css))
        .route("/profile-photo.svg", get(profile_photo))
}
