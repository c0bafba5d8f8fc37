//! Server-side HTML rendering of the page view models.

mod chrome;
mod html;
mod pages;

pub use chrome::{footer, navbar, NavItem, AUTH_PATH, NAV_ITEMS};
pub use html::escape;
pub use pages::{render_about, render_contact, render_home, render_not_found, render_projects};
