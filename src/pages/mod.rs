//! Page controllers. Each one issues its reads, settles its sections and
//! returns a view model the renderer and the JSON API share.

mod about;
mod contact;
mod home;
mod projects;
mod section;

pub use about::{load_about, AboutPage};
pub use contact::{
    load_contact, submit_contact_form, ContactForm, ContactPage, Notification,
    NotificationVariant, SubmissionGate, SubmissionGuard, SubmissionOutcome,
};
pub use home::{load_home, resolve_profile_image, HomePage};
pub use projects::{load_projects, ProjectsPage};
pub use section::Section;
