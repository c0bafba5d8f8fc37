//! Shared constants for end-to-end tests
//!
//! When seeded content changes, update only this file and `fixtures.rs`.

// ============================================================================
// Timing
// ============================================================================

/// How long to wait for a spawned server to answer
pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;

/// Delay between readiness probes
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Timeout of every test client request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Seeded content
// ============================================================================

pub const PROJECT_NEWEST_TITLE: &str = "Portfolio Site";
pub const PROJECT_OLDEST_TITLE: &str = "Log Analyzer";
pub const PROJECT_NEWEST_LINK: &str = "https://github.com/example/portfolio";

pub const EDUCATION_COURSE: &str = "BSc (Hons) in Computer Science";
pub const EDUCATION_INSTITUTION: &str = "University of Testing";

pub const EMAIL_CONTACT_VALUE: &str = "hello@example.com";
pub const GITHUB_CONTACT_USERNAME: &str = "example-dev";
pub const GITHUB_CONTACT_URL: &str = "https://github.com/example-dev";
pub const WEBSITE_CONTACT_URL: &str = "https://example.dev";

pub const PROFILE_PICTURES_BUCKET: &str = "profile-pictures";
pub const PROFILE_PICTURE_NAME: &str = "me 2024.webp";

/// Image the server falls back to in tests
pub const FALLBACK_PROFILE_IMAGE: &str = "/assets/fallback.webp";

// ============================================================================
// Contact form
// ============================================================================

pub const FORM_NAME: &str = "Alice";
pub const FORM_EMAIL: &str = "a@example.com";
pub const FORM_MESSAGE: &str = "Hello";
