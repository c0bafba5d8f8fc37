//! Navbar and footer shared by every page.

use super::html::{escape, icon};
use crate::portfolio::{Icon, FOOTER_TAGLINE, OWNER_NAME};

pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        path: "/",
    },
    NavItem {
        name: "Projects",
        path: "/projects",
    },
    NavItem {
        name: "About",
        path: "/about",
    },
    NavItem {
        name: "Contact",
        path: "/contact",
    },
];

/// Entry point of the admin area, served elsewhere.
pub const AUTH_PATH: &str = "/auth";

fn nav_links(active_path: &str, extra_class: &str) -> String {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let (class, aria) = if item.path == active_path {
                (" active", r#" aria-current="page""#)
            } else {
                ("", "")
            };
            format!(
                r#"<a href="{}" class="nav-link {}{}"{}>{}</a>"#,
                item.path, extra_class, class, aria, item.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The menu open/closed state is a checkbox, it never reaches the server.
pub fn navbar(active_path: &str) -> String {
    format!(
        r#"<nav class="navbar">
<div class="container navbar-inner">
<a href="/" class="brand">{owner}</a>
<div class="nav-desktop">
{desktop}
<a href="{auth}" class="nav-admin">Admin</a>
</div>
<input type="checkbox" id="nav-toggle" class="nav-toggle">
<label for="nav-toggle" class="nav-toggle-button" aria-label="Toggle menu">{menu}{close}</label>
<div class="nav-mobile">
{mobile}
<a href="{auth}" class="nav-admin">Admin</a>
</div>
</div>
</nav>"#,
        owner = escape(OWNER_NAME),
        desktop = nav_links(active_path, "nav-desktop-link"),
        mobile = nav_links(active_path, "nav-mobile-link"),
        auth = AUTH_PATH,
        menu = icon(Icon::Menu, "when-closed"),
        close = icon(Icon::X, "when-open"),
    )
}

pub fn footer(year: i32) -> String {
    format!(
        r#"<footer class="footer">
<div class="container footer-inner">
<div>
<div class="footer-name">{owner}</div>
<p class="muted">{tagline}</p>
</div>
<div>
<p class="muted">© {year} {owner}. All rights reserved.</p>
<p class="muted small">Built with passion and cutting-edge technology</p>
</div>
</div>
</footer>"#,
        owner = escape(OWNER_NAME),
        tagline = escape(FOOTER_TAGLINE),
        year = year,
    )
}
