//! Presentation logic shared by the pages: static profile content, skill
//! grouping and contact link decoration.

mod contacts;
mod icons;
mod profile;
mod skills;

pub use contacts::{contact_icon, contact_url, decorate_contact, display_text, ContactLink};
pub use icons::Icon;
pub use profile::*;
pub use skills::{category_icon, group_skills, SkillCategory};
