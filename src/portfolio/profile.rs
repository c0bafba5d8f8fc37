//! Static biographical content.

use serde::Serialize;

use super::Icon;

pub const OWNER_NAME: &str = "Manuth Lochana";
pub const HOME_TAGLINE: &str = "Developer • Software Innovator • Tech Visionary";
pub const FOOTER_TAGLINE: &str = "Developer • Innovator • Creator";
pub const HOME_INTRO: &str = "Passionate about technology, coding, and creative innovation. Building solutions that combine software development, AI, and design.";
pub const CONTACT_EMAIL: &str = "manuthlochana01@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/manuthlochana";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/manuthlochana";

/// Bucket holding the profile picture.
pub const PROFILE_PICTURES_BUCKET: &str = "profile-pictures";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "AI Enthusiast",
        description: "Exploring advanced AI technologies and fine-tuning models",
    },
    Highlight {
        title: "Creative Developer",
        description: "Combining technical expertise with creative vision",
    },
    Highlight {
        title: "Tech Innovator",
        description: "Building innovative solutions that bridge functionality and aesthetics",
    },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub const HOME_SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        url: GITHUB_URL,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        url: LINKEDIN_URL,
        icon: Icon::Linkedin,
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm Manuth Lochana, passionate about technology, coding, and creative innovation. I work on projects that combine software development, AI, and design. I also founded Thunder Storm Studio, where I focus on video editing, motion graphics, and coding-driven projects.",
    "Additionally, I explore advanced technologies including AI fine-tuning, system optimization, and creative problem-solving. My journey combines technical expertise with creative vision, allowing me to build innovative solutions that bridge the gap between functionality and aesthetics.",
];

pub const AI_WORK_SUMMARY: &str = "Currently working on advanced AI projects using Hugging Face's LLaMA 4 fine-tuning techniques, focusing on PEFT (Parameter-Efficient Fine-Tuning) methods for creating specialized AI models.";
pub const AI_WORK_TAGS: [&str; 5] = [
    "Hugging Face",
    "LLaMA 4",
    "PEFT",
    "Model Training",
    "AI Systems",
];

pub const CAREER_FOCUS: &str = "Aspiring software engineer combining technical expertise with creative vision. My goal is to bridge the gap between cutting-edge technology and innovative design, creating solutions that are both functionally robust and visually compelling.";

pub const PROJECTS_INTRO: &str = "A collection of projects showcasing my work in software development, AI, and creative technology.";
pub const CONTACT_INTRO: &str = "I'm always interested in discussing new opportunities, creative projects, or just having a chat about technology and innovation.";
