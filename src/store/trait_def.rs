//! DataStore trait definition.

use super::models::ObjectRef;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Sort direction of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Suffix used by the backend's `order=` query parameter.
    pub fn as_query_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// Single-field ordering of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Descending,
        }
    }
}

/// The collections the site reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Skills,
    Education,
    Contacts,
    Projects,
    Messages,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Skills => "skills",
            Collection::Education => "education",
            Collection::Contacts => "contacts",
            Collection::Projects => "projects",
            Collection::Messages => "messages",
        }
    }

    /// The ordering every read of this collection uses.
    pub fn default_order(&self) -> OrderBy {
        match self {
            Collection::Skills => OrderBy::ascending("category"),
            Collection::Education => OrderBy::descending("created_at"),
            Collection::Contacts => OrderBy::ascending("created_at"),
            Collection::Projects => OrderBy::descending("created_at"),
            Collection::Messages => OrderBy::descending("created_at"),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when talking to the data store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Injected failure for {0}")]
    Injected(String),
}

/// Capability interface of the hosted backend.
///
/// Tables are addressed by name and always read as an ordered sequence of
/// raw JSON rows; typing happens in [`super::fetch_records`]. Object storage
/// is only listed and resolved to public URLs.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Read every row of `collection`, sorted by `order`.
    async fn query(
        &self,
        collection: &str,
        order: &OrderBy,
    ) -> Result<Vec<serde_json::Value>, StoreError>;

    /// Append a single row to `collection`. Nothing is read back.
    async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<(), StoreError>;

    /// List up to `limit` objects of `bucket` under `prefix`.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectRef>, StoreError>;

    /// Public URL of an object. Pure, never touches the network.
    fn public_url(&self, bucket: &str, object_name: &str) -> String;
}
