//! HTML building helpers.

use chrono::Datelike;

use super::chrome::{footer, navbar};
use crate::portfolio::{Icon, OWNER_NAME};

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn icon(icon: Icon, size_class: &str) -> String {
    format!(
        r#"<i class="icon icon-{} {}" aria-hidden="true"></i>"#,
        icon.slug(),
        size_class
    )
}

/// Pill shaped label, used for skills, technologies and tags.
pub fn badge(text: &str) -> String {
    format!(r#"<span class="badge">{}</span>"#, escape(text))
}

/// Link opening in a new tab.
pub fn external_link(url: &str, class: &str, content: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
        escape(url),
        class,
        content
    )
}

/// Wraps a page body with the document shell, navbar and footer.
///
/// `active_path` is the route highlighted in the navbar.
pub fn page(title: &str, active_path: &str, body: &str) -> String {
    let year = chrono::Utc::now().year();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {owner}</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body>
<div class="page">
{navbar}
<main class="content">
<div class="container">
{body}
</div>
</main>
{footer}
</div>
</body>
</html>
"#,
        title = escape(title),
        owner = escape(OWNER_NAME),
        navbar = navbar(active_path),
        body = body,
        footer = footer(year),
    )
}
