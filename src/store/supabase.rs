//! HTTP client for the hosted Supabase backend.
//!
//! Tables are served by PostgREST under `/rest/v1`, objects by the storage
//! API under `/storage/v1`. Both are authenticated with the project's anon
//! key, which is sent as `apikey` and as a bearer token.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::models::ObjectRef;
use super::trait_def::{DataStore, OrderBy, StoreError};

#[derive(Serialize)]
struct ListObjectsBody<'a> {
    prefix: &'a str,
    limit: usize,
    offset: usize,
    #[serde(rename = "sortBy")]
    sort_by: SortBy,
}

#[derive(Serialize)]
struct SortBy {
    column: &'static str,
    order: &'static str,
}

/// [`DataStore`] backed by a Supabase project.
pub struct SupabaseDataStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseDataStore {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyzcompany.supabase.co")
    /// * `api_key` - Anon key of the project
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, api_key: String, timeout_sec: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn list_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/list/{}", self.base_url, bucket)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Sends the request and turns non-2xx answers into [`StoreError::Api`].
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = self.authorized(request).send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout
            } else {
                StoreError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DataStore for SupabaseDataStore {
    async fn query(
        &self,
        collection: &str,
        order: &OrderBy,
    ) -> Result<Vec<serde_json::Value>, StoreError> {
        let order_param = format!("{}.{}", order.column, order.direction.as_query_str());
        debug!(collection, order = %order_param, "Querying collection");

        let request = self
            .client
            .get(self.table_url(collection))
            .query(&[("select", "*"), ("order", order_param.as_str())]);

        self.send(request)
            .await?
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| {
                StoreError::InvalidResponse(format!("Failed to parse {} rows: {}", collection, e))
            })
    }

    async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<(), StoreError> {
        debug!(collection, "Inserting row");

        let request = self
            .client
            .post(self.table_url(collection))
            .header("Prefer", "return=minimal")
            .json(&[record]);

        self.send(request).await?;
        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectRef>, StoreError> {
        debug!(bucket, prefix, limit, "Listing objects");

        // One extra slot so a folder placeholder does not eat the whole page.
        let body = ListObjectsBody {
            prefix,
            limit: limit + 1,
            offset: 0,
            sort_by: SortBy {
                column: "name",
                order: "asc",
            },
        };
        let request = self.client.post(self.list_url(bucket)).json(&body);

        let objects = self
            .send(request)
            .await?
            .json::<Vec<ObjectRef>>()
            .await
            .map_err(|e| {
                StoreError::InvalidResponse(format!("Failed to parse {} listing: {}", bucket, e))
            })?;

        Ok(objects
            .into_iter()
            .filter(|object| !object.is_placeholder())
            .take(limit)
            .collect())
    }

    fn public_url(&self, bucket: &str, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            bucket,
            urlencoding::encode(object_name)
        )
    }
}
