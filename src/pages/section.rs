//! Fetch-and-render state shared by every page.

use serde::Serialize;
use std::future::Future;
use std::time::Instant;
use tracing::warn;

use crate::server::metrics::record_store_request;
use crate::store::StoreError;

/// One independently fetched part of a page.
///
/// Goes `Idle -> Loading -> Ready | Empty`. A failed fetch ends in `Empty`,
/// which renders exactly like a successful fetch of zero rows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum Section<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Empty,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Idle
    }
}

impl<T> Section<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `fetch` to completion and settles the section with its result.
    ///
    /// Errors are logged and counted under `label`, then dropped.
    pub async fn load<F>(&mut self, label: &str, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, StoreError>>,
    {
        *self = Section::Loading;
        let start = Instant::now();

        let result = fetch.await;
        record_store_request("query", label, &result, start.elapsed());

        *self = match result {
            Ok(items) => Section::Ready(items),
            Err(err) => {
                warn!(section = label, "Read failed, rendering empty: {}", err);
                Section::Empty
            }
        };
    }

    /// Convenience for a section that is loaded right away.
    pub async fn loaded<F>(label: &str, fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, StoreError>>,
    {
        let mut section = Self::new();
        section.load(label, fetch).await;
        section
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Section::Ready(_) | Section::Empty)
    }

    /// The rows to render; empty unless the fetch succeeded.
    pub fn items(&self) -> &[T] {
        match self {
            Section::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn map<U, F: FnOnce(Vec<T>) -> Vec<U>>(self, f: F) -> Section<U> {
        match self {
            Section::Idle => Section::Idle,
            Section::Loading => Section::Loading,
            Section::Ready(items) => Section::Ready(f(items)),
            Section::Empty => Section::Empty,
        }
    }
}
