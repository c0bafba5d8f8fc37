use serde::Serialize;

use super::Section;
use crate::portfolio::{GITHUB_URL, PROJECTS_INTRO};
use crate::store::{fetch_records, Collection, DataStore, ProjectRecord};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectsPage {
    pub intro: &'static str,
    pub loading: bool,
    pub projects: Section<ProjectRecord>,
    pub github_url: &'static str,
}

pub async fn load_projects(store: &dyn DataStore) -> ProjectsPage {
    let projects = Section::loaded(
        Collection::Projects.name(),
        fetch_records::<ProjectRecord>(store, Collection::Projects),
    )
    .await;

    ProjectsPage {
        intro: PROJECTS_INTRO,
        loading: !projects.is_settled(),
        projects,
        github_url: GITHUB_URL,
    }
}
