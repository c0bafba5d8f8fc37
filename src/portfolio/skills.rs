//! Grouping of flat skill rows into categories.

use serde::Serialize;
use std::collections::HashMap;

use super::Icon;
use crate::store::SkillRecord;

/// Skills sharing a category, as shown on the About page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<String>,
}

/// Icon of a skill category. Unknown categories get [`Icon::Code`].
pub fn category_icon(category: &str) -> Icon {
    match category {
        "Programming" => Icon::Code,
        "Frameworks" => Icon::Wrench,
        "Databases" => Icon::Database,
        "AI & ML" => Icon::Brain,
        "Cybersecurity" => Icon::Shield,
        "Creative Tools" => Icon::Palette,
        _ => Icon::Code,
    }
}

/// Groups `skills` by category in a single pass.
///
/// Categories appear in the order they are first seen and each keeps its
/// skills in input order. The input is not re-sorted.
pub fn group_skills(skills: Vec<SkillRecord>) -> Vec<SkillCategory> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut categories: Vec<SkillCategory> = Vec::new();

    for skill in skills {
        match positions.get(&skill.category) {
            Some(&position) => categories[position].skills.push(skill.name),
            None => {
                positions.insert(skill.category.clone(), categories.len());
                categories.push(SkillCategory {
                    icon: category_icon(&skill.category),
                    title: skill.category,
                    skills: vec![skill.name],
                });
            }
        }
    }

    categories
}
