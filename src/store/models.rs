//! Typed rows of the backend collections.
//!
//! Every row read from the store is decoded into one of these before it
//! reaches a page. Field names match the backend columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque row id. The backend hands out either integers or uuids depending on
/// the table, both are kept in their string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Str(s) => RecordId(s),
        })
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Read collections
// =============================================================================

/// One row of `skills`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillRecord {
    pub category: String,
    pub name: String,
}

/// One row of `education`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EducationRecord {
    pub id: RecordId,
    pub course: String,
    pub institution: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One row of `contacts`. `value` is the raw address, e.g. an email or a URL.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactLinkRecord {
    pub platform: String,
    #[serde(default)]
    pub username: Option<String>,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// One row of `projects`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProjectRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Write collections
// =============================================================================

/// One row of `messages`, appended by the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// Object storage
// =============================================================================

/// An entry of an object storage listing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ObjectRef {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl ObjectRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// Folder placeholders such as `.emptyFolderPlaceholder`.
    pub fn is_placeholder(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_value(json!(42)).unwrap();
        let uuid: RecordId =
            serde_json::from_value(json!("6f1c1a9e-2d4b-4c55-9a57-0f3b4f1e2a10")).unwrap();

        assert_eq!(numeric.0, "42");
        assert_eq!(uuid.0, "6f1c1a9e-2d4b-4c55-9a57-0f3b4f1e2a10");
    }

    #[test]
    fn project_with_null_technologies_has_none() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "id": 1,
            "title": "Thunder",
            "description": "A storm",
            "technologies": null,
            "created_at": "2024-03-01T10:00:00+00:00"
        }))
        .unwrap();

        assert!(project.technologies.is_empty());
        assert_eq!(project.link, None);
    }

    #[test]
    fn project_keeps_technologies_order() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "id": "p-1",
            "title": "Thunder",
            "description": "A storm",
            "technologies": ["Rust", "Axum", "Postgres"],
            "link": "https://example.com",
            "created_at": "2024-03-01T10:00:00.123456+00:00"
        }))
        .unwrap();

        assert_eq!(project.technologies, vec!["Rust", "Axum", "Postgres"]);
        assert_eq!(project.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn contact_optional_fields_default_to_none() {
        let contact: ContactLinkRecord = serde_json::from_value(json!({
            "platform": "Email",
            "value": "me@example.com"
        }))
        .unwrap();

        assert_eq!(contact.username, None);
        assert_eq!(contact.icon, None);
    }

    #[test]
    fn placeholder_objects_are_detected() {
        assert!(ObjectRef::named(".emptyFolderPlaceholder").is_placeholder());
        assert!(!ObjectRef::named("me.webp").is_placeholder());
    }
}
