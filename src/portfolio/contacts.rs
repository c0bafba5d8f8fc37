//! Decoration of contact rows into renderable links.

use serde::Serialize;

use super::Icon;
use crate::store::ContactLinkRecord;

const MAILTO_PREFIX: &str = "mailto:";

/// A contact link ready to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactLink {
    /// The platform, e.g. "Email" or "GitHub".
    pub name: String,
    pub display_text: String,
    pub url: String,
    pub icon: Icon,
}

/// `username` when present and non-empty, `value` otherwise.
pub fn display_text(record: &ContactLinkRecord) -> String {
    match record.username.as_deref() {
        Some(username) if !username.is_empty() => username.to_string(),
        _ => record.value.clone(),
    }
}

/// Link target of a contact. Email addresses get a `mailto:` prefix unless
/// they already carry one.
pub fn contact_url(record: &ContactLinkRecord) -> String {
    if record.platform == "Email" && !record.value.starts_with(MAILTO_PREFIX) {
        format!("{}{}", MAILTO_PREFIX, record.value)
    } else {
        record.value.clone()
    }
}

/// Icon named by the row, [`Icon::Mail`] when missing or unknown.
pub fn contact_icon(icon_name: Option<&str>) -> Icon {
    icon_name.and_then(Icon::from_name).unwrap_or(Icon::Mail)
}

pub fn decorate_contact(record: ContactLinkRecord) -> ContactLink {
    ContactLink {
        display_text: display_text(&record),
        url: contact_url(&record),
        icon: contact_icon(record.icon.as_deref()),
        name: record.platform,
    }
}
