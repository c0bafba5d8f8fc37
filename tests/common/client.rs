//! HTTP client for end-to-end tests
//!
//! This module wraps reqwest and provides methods for all portfolio-server
//! endpoints. When routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET `path` and return the body, asserting a 200.
    pub async fn get_html(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::OK,
            "GET {} failed",
            path
        );
        response.text().await.expect("Failed to read body")
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub async fn get_home_page(&self) -> String {
        self.get_html("/").await
    }

    pub async fn get_projects_page(&self) -> String {
        self.get_html("/projects").await
    }

    pub async fn get_about_page(&self) -> String {
        self.get_html("/about").await
    }

    pub async fn get_contact_page(&self) -> String {
        self.get_html("/contact").await
    }

    /// Posts the contact form as a browser would.
    pub async fn post_contact_form(
        &self,
        form_id: &str,
        name: &str,
        email: &str,
        message: &str,
    ) -> Response {
        self.client
            .post(format!("{}/contact", self.base_url))
            .form(&[
                ("form_id", form_id),
                ("name", name),
                ("email", email),
                ("message", message),
            ])
            .send()
            .await
            .expect("Contact form request failed")
    }

    // ========================================================================
    // JSON API
    // ========================================================================

    pub async fn get_status(&self) -> Response {
        self.get("/api/v1/status").await
    }

    pub async fn get_home_json(&self) -> Response {
        self.get("/api/v1/home").await
    }

    pub async fn get_projects_json(&self) -> Response {
        self.get("/api/v1/projects").await
    }

    pub async fn get_about_json(&self) -> Response {
        self.get("/api/v1/about").await
    }

    pub async fn get_contact_json(&self) -> Response {
        self.get("/api/v1/contact").await
    }

    pub async fn post_message(
        &self,
        form_id: &str,
        name: &str,
        email: &str,
        message: &str,
    ) -> Response {
        self.client
            .post(format!("{}/api/v1/contact/messages", self.base_url))
            .json(&json!({
                "form_id": form_id,
                "name": name,
                "email": email,
                "message": message,
            }))
            .send()
            .await
            .expect("Post message request failed")
    }
}
