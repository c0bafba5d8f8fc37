use serde::Serialize;

/// Icons the site knows how to render.
///
/// Content rows name icons by their display name (e.g. `"Github"`,
/// `"MessageCircle"`); anything outside this set has no rendering and callers
/// pick a fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    BookOpen,
    Brain,
    Code,
    Database,
    ExternalLink,
    Facebook,
    Github,
    Globe,
    GraduationCap,
    Instagram,
    Linkedin,
    Mail,
    Menu,
    MessageCircle,
    Palette,
    Phone,
    Send,
    Shield,
    Twitter,
    Wrench,
    X,
    Youtube,
}

impl Icon {
    pub fn from_name(name: &str) -> Option<Icon> {
        let icon = match name {
            "ArrowRight" => Icon::ArrowRight,
            "BookOpen" => Icon::BookOpen,
            "Brain" => Icon::Brain,
            "Code" => Icon::Code,
            "Database" => Icon::Database,
            "ExternalLink" => Icon::ExternalLink,
            "Facebook" => Icon::Facebook,
            "Github" => Icon::Github,
            "Globe" => Icon::Globe,
            "GraduationCap" => Icon::GraduationCap,
            "Instagram" => Icon::Instagram,
            "Linkedin" => Icon::Linkedin,
            "Mail" => Icon::Mail,
            "Menu" => Icon::Menu,
            "MessageCircle" => Icon::MessageCircle,
            "Palette" => Icon::Palette,
            "Phone" => Icon::Phone,
            "Send" => Icon::Send,
            "Shield" => Icon::Shield,
            "Twitter" => Icon::Twitter,
            "Wrench" => Icon::Wrench,
            "X" => Icon::X,
            "Youtube" => Icon::Youtube,
            _ => return None,
        };
        Some(icon)
    }

    /// Kebab-case slug, used as CSS class suffix.
    pub fn slug(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::BookOpen => "book-open",
            Icon::Brain => "brain",
            Icon::Code => "code",
            Icon::Database => "database",
            Icon::ExternalLink => "external-link",
            Icon::Facebook => "facebook",
            Icon::Github => "github",
            Icon::Globe => "globe",
            Icon::GraduationCap => "graduation-cap",
            Icon::Instagram => "instagram",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::Menu => "menu",
            Icon::MessageCircle => "message-circle",
            Icon::Palette => "palette",
            Icon::Phone => "phone",
            Icon::Send => "send",
            Icon::Shield => "shield",
            Icon::Twitter => "twitter",
            Icon::Wrench => "wrench",
            Icon::X => "x",
            Icon::Youtube => "youtube",
        }
    }
}
