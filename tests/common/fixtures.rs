//! Seeded content for the in-memory store used by end-to-end tests

use super::constants::*;
use portfolio_server::store::{FixturesFile, InMemoryDataStore};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures() -> FixturesFile {
    let mut collections = HashMap::new();

    collections.insert(
        "skills".to_string(),
        vec![
            json!({ "category": "Programming", "name": "Rust" }),
            json!({ "category": "AI & ML", "name": "PyTorch" }),
            json!({ "category": "Programming", "name": "Python" }),
            json!({ "category": "Databases", "name": "Postgres" }),
        ],
    );

    collections.insert(
        "education".to_string(),
        vec![json!({
            "id": 1,
            "course": EDUCATION_COURSE,
            "institution": EDUCATION_INSTITUTION,
            "status": "Ongoing",
            "description": null,
            "created_at": "2023-09-01T00:00:00Z"
        })],
    );

    collections.insert(
        "contacts".to_string(),
        vec![
            json!({
                "platform": "Email",
                "username": null,
                "value": EMAIL_CONTACT_VALUE,
                "icon": "Mail",
                "created_at": "2024-01-01T00:00:00Z"
            }),
            json!({
                "platform": "GitHub",
                "username": GITHUB_CONTACT_USERNAME,
                "value": GITHUB_CONTACT_URL,
                "icon": "Github",
                "created_at": "2024-01-02T00:00:00Z"
            }),
            // Icon names are case-sensitive, this one falls back to mail
            json!({
                "platform": "Website",
                "username": null,
                "value": WEBSITE_CONTACT_URL,
                "icon": "globe",
                "created_at": "2024-01-03T00:00:00Z"
            }),
        ],
    );

    collections.insert(
        "projects".to_string(),
        vec![
            json!({
                "id": "b1a1",
                "title": PROJECT_OLDEST_TITLE,
                "description": "Parses and summarizes server logs.",
                "technologies": null,
                "link": null,
                "created_at": "2023-03-01T10:00:00Z"
            }),
            json!({
                "id": "b2b2",
                "title": PROJECT_NEWEST_TITLE,
                "description": "This very site.",
                "technologies": ["Rust", "axum"],
                "link": PROJECT_NEWEST_LINK,
                "created_at": "2024-06-01T10:00:00Z"
            }),
        ],
    );

    let mut buckets = HashMap::new();
    buckets.insert(
        PROFILE_PICTURES_BUCKET.to_string(),
        vec![
            ".emptyFolderPlaceholder".to_string(),
            PROFILE_PICTURE_NAME.to_string(),
        ],
    );

    FixturesFile {
        collections,
        buckets,
    }
}

/// Store with two projects, two contacts, one education entry, four skills
/// and one profile picture. Public URLs live under `/assets`.
pub fn seeded_store() -> InMemoryDataStore {
    InMemoryDataStore::from_fixtures(fixtures(), "/assets")
}

/// Writes the seeded content as a fixtures file.
/// Returns (temp_dir, fixtures_path)
pub fn write_fixtures_file() -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("fixtures.json");
    let fixtures = fixtures();
    let content = json!({
        "collections": fixtures.collections,
        "buckets": fixtures.buckets,
    });
    std::fs::write(&path, serde_json::to_string_pretty(&content)?)?;
    Ok((dir, path))
}
