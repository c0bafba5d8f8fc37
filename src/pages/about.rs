use serde::Serialize;

use super::Section;
use crate::portfolio::{
    group_skills, SkillCategory, ABOUT_PARAGRAPHS, AI_WORK_SUMMARY, AI_WORK_TAGS, CAREER_FOCUS,
};
use crate::store::{fetch_records, Collection, DataStore, EducationRecord, SkillRecord};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AboutPage {
    pub paragraphs: Vec<&'static str>,
    pub loading: bool,
    pub skills: Section<SkillCategory>,
    pub education: Section<EducationRecord>,
    pub ai_work_summary: &'static str,
    pub ai_work_tags: Vec<&'static str>,
    pub career_focus: &'static str,
}

/// Loads skills and education concurrently. Each settles on its own, a
/// failure of one leaves the other untouched.
pub async fn load_about(store: &dyn DataStore) -> AboutPage {
    let mut skills: Section<SkillRecord> = Section::new();
    let mut education: Section<EducationRecord> = Section::new();

    tokio::join!(
        skills.load(
            Collection::Skills.name(),
            fetch_records(store, Collection::Skills)
        ),
        education.load(
            Collection::Education.name(),
            fetch_records(store, Collection::Education)
        ),
    );

    AboutPage {
        paragraphs: ABOUT_PARAGRAPHS.to_vec(),
        loading: !(skills.is_settled() && education.is_settled()),
        skills: skills.map(group_skills),
        education,
        ai_work_summary: AI_WORK_SUMMARY,
        ai_work_tags: AI_WORK_TAGS.to_vec(),
        career_focus: CAREER_FOCUS,
    }
}
