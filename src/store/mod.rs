mod memory;
mod models;
mod supabase;
mod trait_def;

pub use memory::{FixturesFile, InMemoryDataStore};
pub use models::{
    ContactLinkRecord, EducationRecord, MessageRecord, ObjectRef, ProjectRecord, RecordId,
    SkillRecord,
};
pub use supabase::SupabaseDataStore;
pub use trait_def::{Collection, DataStore, Direction, OrderBy, StoreError};

use serde::de::DeserializeOwned;
use tracing::warn;

/// Reads `collection` with its canonical ordering and decodes every row.
///
/// Rows that do not match `T` are logged and dropped, the remaining ones keep
/// the order the store returned them in.
pub async fn fetch_records<T: DeserializeOwned>(
    store: &dyn DataStore,
    collection: Collection,
) -> Result<Vec<T>, StoreError> {
    let rows = store
        .query(collection.name(), &collection.default_order())
        .await?;
    Ok(decode_rows(collection, rows))
}

fn decode_rows<T: DeserializeOwned>(collection: Collection, rows: Vec<serde_json::Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<T>(row) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(%collection, index, "Skipping malformed row: {}", err);
                None
            }
        })
        .collect()
}

/// Appends `message` to the `messages` collection.
pub async fn insert_message(store: &dyn DataStore, message: &MessageRecord) -> Result<(), StoreError> {
    let record = serde_json::to_value(message)
        .map_err(|e| StoreError::InvalidResponse(format!("Failed to encode message: {}", e)))?;
    store.insert(Collection::Messages.name(), record).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn malformed_rows_are_skipped() {
        let store = InMemoryDataStore::default();
        store.set_rows(
            "skills",
            vec![
                json!({"category": "Programming", "name": "Rust"}),
                json!({"category": "Programming"}),
                json!({"category": 7, "name": "Seven"}),
                json!({"category": "Databases", "name": "Postgres"}),
            ],
        );

        let skills: Vec<SkillRecord> = fetch_records(&store, Collection::Skills).await.unwrap();

        assert_eq!(
            skills,
            vec![
                SkillRecord {
                    category: "Databases".to_string(),
                    name: "Postgres".to_string()
                },
                SkillRecord {
                    category: "Programming".to_string(),
                    name: "Rust".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn read_failure_is_propagated() {
        let store = InMemoryDataStore::default();
        store.fail_collection("projects");

        let result = fetch_records::<ProjectRecord>(&store, Collection::Projects).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn message_is_inserted_with_its_three_fields() {
        let store = InMemoryDataStore::default();
        let message = MessageRecord {
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
            message: "Hello".to_string(),
        };

        insert_message(&store, &message).await.unwrap();

        assert_eq!(
            store.rows("messages"),
            vec![json!({"name": "Alice", "email": "a@example.com", "message": "Hello"})]
        );
    }
}
