//! Page bodies.

use super::html::{badge, escape, external_link, icon, page};
use crate::pages::{
    AboutPage, ContactPage, HomePage, Notification, NotificationVariant, ProjectsPage,
};
use crate::portfolio::{Icon, OWNER_NAME};

pub fn render_home(home: &HomePage) -> String {
    let highlights: String = home
        .highlights
        .iter()
        .map(|h| {
            format!(
                r#"<div class="card"><h3>{}</h3><p class="muted small">{}</p></div>"#,
                escape(h.title),
                escape(h.description)
            )
        })
        .collect();

    let socials: String = home
        .social_links
        .iter()
        .map(|link| {
            external_link(
                link.url,
                "social-link",
                &format!(
                    r#"{}<span class="sr-only">{}</span>"#,
                    icon(link.icon, "icon-lg"),
                    escape(link.label)
                ),
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
<img src="{image}" alt="{name}" class="profile-photo">
<div>
<h1>{name}</h1>
<p class="lead">{tagline}</p>
<p class="muted">{intro}</p>
<div class="actions">
<a href="/projects" class="button">View Projects {arrow}</a>
<a href="/contact" class="button outline">Get in Touch</a>
</div>
</div>
</section>
<section class="grid three">{highlights}</section>
<section class="socials">{socials}</section>"#,
        image = escape(&home.profile_image),
        name = escape(home.name),
        tagline = escape(home.tagline),
        intro = escape(home.intro),
        arrow = icon(Icon::ArrowRight, "icon-sm"),
        highlights = highlights,
        socials = socials,
    );

    page("Home", "/", &body)
}

pub fn render_projects(projects: &ProjectsPage) -> String {
    let content = if projects.loading {
        r#"<div class="loading">Loading projects...</div>"#.to_string()
    } else {
        let cards: String = projects
            .projects
            .items()
            .iter()
            .map(|project| {
                let technologies: String =
                    project.technologies.iter().map(|t| badge(t)).collect();
                let link = project
                    .link
                    .as_deref()
                    .map(|url| {
                        external_link(
                            url,
                            "button outline small",
                            &format!("{} View Project", icon(Icon::ExternalLink, "icon-sm")),
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<article class="card project" id="project-{id}">
<h3>{title}</h3>
<p class="muted">{description}</p>
<div class="badges">{technologies}</div>
{link}
</article>"#,
                    id = escape(&project.id.0),
                    title = escape(&project.title),
                    description = escape(&project.description),
                    technologies = technologies,
                    link = link,
                )
            })
            .collect();

        format!(
            r#"<section class="grid two">{cards}</section>
<section class="card centered">
<h3>Explore More Projects</h3>
<p class="muted">Check out my GitHub for more projects and open-source contributions</p>
{github}
</section>"#,
            cards = cards,
            github = external_link(
                projects.github_url,
                "button",
                &format!("{} View GitHub Profile", icon(Icon::Github, "icon-md")),
            ),
        )
    };

    let body = format!(
        r#"<header class="page-header">
<h1>Projects</h1>
<p class="lead">{intro}</p>
</header>
{content}"#,
        intro = escape(projects.intro),
        content = content,
    );

    page("Projects", "/projects", &body)
}

pub fn render_about(about: &AboutPage) -> String {
    let paragraphs: String = about
        .paragraphs
        .iter()
        .map(|p| format!(r#"<p class="lead">{}</p>"#, escape(p)))
        .collect();

    let content = if about.loading {
        r#"<div class="loading">Loading...</div>"#.to_string()
    } else {
        let skills: String = about
            .skills
            .items()
            .iter()
            .map(|category| {
                let skills: String = category.skills.iter().map(|s| badge(s)).collect();
                format!(
                    r#"<div class="card skill-category">
<div class="card-title">{icon}<h3>{title}</h3></div>
<div class="badges">{skills}</div>
</div>"#,
                    icon = icon(category.icon, "icon-lg"),
                    title = escape(&category.title),
                    skills = skills,
                )
            })
            .collect();

        let education: String = about
            .education
            .items()
            .iter()
            .map(|item| {
                format!(
                    r#"<div class="card education" id="education-{id}">
{icon}
<div>
<div class="education-heading"><h3>{course}</h3><span class="status">{status}</span></div>
<p class="accent">{institution}</p>
<p class="muted">{description}</p>
</div>
</div>"#,
                    id = escape(&item.id.0),
                    icon = icon(Icon::GraduationCap, "icon-md"),
                    course = escape(&item.course),
                    status = escape(&item.status),
                    institution = escape(&item.institution),
                    description = escape(item.description.as_deref().unwrap_or_default()),
                )
            })
            .collect();

        let tags: String = about.ai_work_tags.iter().map(|t| badge(t)).collect();

        format!(
            r#"<section class="skills">
<h2>Skills &amp; Technologies</h2>
<div class="grid two">{skills}</div>
<div class="card highlight">
<h3>{brain} Recent Work in AI</h3>
<p class="muted">{ai_summary}</p>
<div class="badges">{tags}</div>
</div>
</section>
<section class="education-list">
<h2>Education</h2>
{education}
</section>
<section class="card">
<h3>{book} Career Focus</h3>
<p class="muted">{career}</p>
</section>"#,
            skills = skills,
            brain = icon(Icon::Brain, "icon-md"),
            ai_summary = escape(about.ai_work_summary),
            tags = tags,
            education = education,
            book = icon(Icon::BookOpen, "icon-md"),
            career = escape(about.career_focus),
        )
    };

    let body = format!(
        r#"<header class="page-header">
<h1>About Me</h1>
{paragraphs}
</header>
{content}"#,
        paragraphs = paragraphs,
        content = content,
    );

    page("About", "/about", &body)
}

fn render_notification(notification: &Notification) -> String {
    let variant = match notification.variant {
        NotificationVariant::Default => "default",
        NotificationVariant::Destructive => "destructive",
    };
    format!(
        r#"<div class="toast toast-{variant}" role="status">
<div class="toast-title">{title}</div>
<div class="toast-description">{description}</div>
</div>"#,
        variant = variant,
        title = escape(notification.title),
        description = escape(notification.description),
    )
}

pub fn render_contact(contact: &ContactPage) -> String {
    let links: String = contact
        .links
        .items()
        .iter()
        .map(|link| {
            external_link(
                &link.url,
                "card contact-link",
                &format!(
                    r#"{icon}<div><div class="contact-name">{name}</div><div class="muted small">{text}</div></div>"#,
                    icon = icon(link.icon, "icon-md"),
                    name = escape(&link.name),
                    text = escape(&link.display_text),
                ),
            )
        })
        .collect();

    let (disabled, submit_label) = if contact.submitting {
        (" disabled", "Sending...")
    } else {
        ("", "Send Message")
    };

    let notification = contact
        .notification
        .as_ref()
        .map(render_notification)
        .unwrap_or_default();

    let form = &contact.form;
    let body = format!(
        r#"{notification}
<header class="page-header">
<h1>Get in Touch</h1>
<p class="lead">{intro}</p>
</header>
<div class="grid two">
<section class="card">
<h2>Send a Message</h2>
<form method="post" action="/contact" class="contact-form">
<input type="hidden" name="form_id" value="{form_id}">
<label for="name">Your Name</label>
<input id="name" name="name" type="text" value="{name}" required placeholder="Enter your full name">
<label for="email">Email Address</label>
<input id="email" name="email" type="email" value="{email}" required placeholder="your.email@example.com">
<label for="message">Message</label>
<textarea id="message" name="message" rows="5" required placeholder="Tell me about your project or just say hello!">{message}</textarea>
<button type="submit" class="button full"{disabled}>{send} {submit_label}</button>
</form>
</section>
<div>
<section class="card">
<h2>Contact Information</h2>
<div class="contact-line">{mail} <span>{email_address}</span></div>
<div class="contact-line"><span class="pulse"></span> <span>Available for new opportunities</span></div>
</section>
<section class="card">
<h2>Connect with Me</h2>
<div class="contact-links">{links}</div>
</section>
</div>
</div>"#,
        notification = notification,
        intro = escape(contact.intro),
        form_id = escape(&form.form_id),
        name = escape(&form.name),
        email = escape(&form.email),
        message = escape(&form.message),
        disabled = disabled,
        send = icon(Icon::Send, "icon-sm"),
        submit_label = submit_label,
        mail = icon(Icon::Mail, "icon-md"),
        email_address = escape(contact.email),
        links = links,
    );

    page("Contact", "/contact", &body)
}

pub fn render_not_found(path: &str) -> String {
    let body = format!(
        r#"<header class="page-header">
<h1>404</h1>
<p class="lead">Oops! Page not found: <code>{path}</code></p>
<a href="/" class="button">Return to {owner}</a>
</header>"#,
        path = escape(path),
        owner = escape(OWNER_NAME),
    );
    page("Not Found", path, &body)
}
