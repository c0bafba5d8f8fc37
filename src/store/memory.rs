//! In-process [`DataStore`].
//!
//! Serves the site offline from a JSON fixtures file and backs the test
//! suites, where collections and buckets can be made to fail on demand and
//! inserts can be held in flight.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::debug;

use super::models::ObjectRef;
use super::trait_def::{DataStore, Direction, OrderBy, StoreError};

/// On-disk seed for [`InMemoryDataStore`].
///
/// ```json
/// {
///   "collections": { "skills": [{ "category": "Programming", "name": "Rust" }] },
///   "buckets": { "profile-pictures": ["me.webp"] }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FixturesFile {
    pub collections: HashMap<String, Vec<Value>>,
    pub buckets: HashMap<String, Vec<String>>,
}

impl FixturesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixtures file: {:?}", path))
    }
}

pub struct InMemoryDataStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    buckets: Mutex<HashMap<String, Vec<ObjectRef>>>,
    failing_collections: Mutex<HashSet<String>>,
    failing_buckets: Mutex<HashSet<String>>,
    public_base_url: String,
    /// `true` while inserts may complete.
    insert_gate: watch::Sender<bool>,
    insert_calls: watch::Sender<usize>,
}

impl Default for InMemoryDataStore {
    fn default() -> Self {
        Self::new("/assets")
    }
}

impl InMemoryDataStore {
    /// Empty store whose public object URLs live under `public_base_url`.
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            buckets: Mutex::new(HashMap::new()),
            failing_collections: Mutex::new(HashSet::new()),
            failing_buckets: Mutex::new(HashSet::new()),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            insert_gate: watch::Sender::new(true),
            insert_calls: watch::Sender::new(0),
        }
    }

    pub fn from_fixtures(fixtures: FixturesFile, public_base_url: impl Into<String>) -> Self {
        let store = Self::new(public_base_url);
        for (collection, rows) in fixtures.collections {
            store.set_rows(&collection, rows);
        }
        for (bucket, names) in fixtures.buckets {
            store.set_objects(&bucket, names.into_iter().map(ObjectRef::named).collect());
        }
        store
    }

    pub fn from_fixtures_file(path: &Path, public_base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::from_fixtures(
            FixturesFile::load(path)?,
            public_base_url,
        ))
    }

    /// Replace all rows of `collection`.
    pub fn set_rows(&self, collection: &str, rows: Vec<Value>) {
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), rows);
    }

    /// Current rows of `collection`, in insertion order.
    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_objects(&self, bucket: &str, objects: Vec<ObjectRef>) {
        self.buckets
            .lock()
            .unwrap()
            .insert(bucket.to_string(), objects);
    }

    /// Make every read and insert on `collection` fail.
    pub fn fail_collection(&self, collection: &str) {
        self.failing_collections
            .lock()
            .unwrap()
            .insert(collection.to_string());
    }

    pub fn restore_collection(&self, collection: &str) {
        self.failing_collections.lock().unwrap().remove(collection);
    }

    /// Make every listing of `bucket` fail.
    pub fn fail_bucket(&self, bucket: &str) {
        self.failing_buckets
            .lock()
            .unwrap()
            .insert(bucket.to_string());
    }

    /// Keep inserts pending until [`Self::release_inserts`] is called.
    pub fn hold_inserts(&self) {
        self.insert_gate.send_replace(false);
    }

    pub fn release_inserts(&self) {
        self.insert_gate.send_replace(true);
    }

    /// Number of insert calls received so far, including failed and pending ones.
    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.borrow()
    }

    /// Wait until at least `count` insert calls have been received.
    pub async fn wait_for_insert_calls(&self, count: usize) {
        let mut calls = self.insert_calls.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = calls.wait_for(|n| *n >= count).await;
    }

    fn check_collection(&self, collection: &str) -> Result<(), StoreError> {
        if self.failing_collections.lock().unwrap().contains(collection) {
            return Err(StoreError::Injected(collection.to_string()));
        }
        Ok(())
    }
}

/// Orders JSON scalars the way the backend would for a single column.
/// Missing and null values sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn query(&self, collection: &str, order: &OrderBy) -> Result<Vec<Value>, StoreError> {
        self.check_collection(collection)?;

        let mut rows = self.rows(collection);
        rows.sort_by(|a, b| {
            let ordering = compare_values(a.get(&order.column), b.get(&order.column));
            match order.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        debug!(collection, rows = rows.len(), "In-memory query");
        Ok(rows)
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<(), StoreError> {
        self.insert_calls.send_modify(|n| *n += 1);

        let mut gate = self.insert_gate.subscribe();
        let _ = gate.wait_for(|open| *open).await;

        self.check_collection(collection)?;
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectRef>, StoreError> {
        if self.failing_buckets.lock().unwrap().contains(bucket) {
            return Err(StoreError::Injected(bucket.to_string()));
        }

        Ok(self
            .buckets
            .lock()
            .unwrap()
            .get(bucket)
            .map(|objects| {
                objects
                    .iter()
                    .filter(|o| o.name.starts_with(prefix) && !o.is_placeholder())
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn public_url(&self, bucket: &str, object_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url,
            bucket,
            urlencoding::encode(object_name)
        )
    }
}
