/// Resume section renderers.
///
/// Each renderer maps the immutable [`ResumeData`] to the new child content
/// of one container. The wasm32 glue clears the container and mounts the
/// result; a missing container simply skips the step.
use crate::data::{Glyph, Job, ResumeData, Skill};
use crate::node::{Element, Node};

/// Phrase inside the intro description that gets the inline-code styling.
pub const HIGHLIGHT_PHRASE: &str = "Frontend Developer";

// ── Experience ─────────────────────────────────────────────────

/// Translation identity index for each display position.
///
/// Identity follows the job, not its position: the newest job is always
/// `job1`. With three jobs this is `[1, 2, 3]` when reversed (newest
/// first) and `[3, 2, 1]` otherwise.
pub fn experience_identity_indices(len: usize, reverse_order: bool) -> Vec<usize> {
    (0..len)
        .map(|pos| if reverse_order { pos + 1 } else { len - pos })
        .collect()
}

/// Render the experience list. `reverse_order` shows the most recent job
/// first (the document lists jobs oldest first).
pub fn render_experience(data: &ResumeData, reverse_order: bool) -> Vec<Element> {
    let jobs: Vec<&Job> = if reverse_order {
        data.experience.iter().rev().collect()
    } else {
        data.experience.iter().collect()
    };
    let indices = experience_identity_indices(jobs.len(), reverse_order);

    jobs.into_iter()
        .zip(indices)
        .map(|(job, idx)| experience_item(job, idx))
        .collect()
}

fn experience_item(job: &Job, idx: usize) -> Element {
    let mut date = Element::new("span").class("experience-date");
    if idx == 3 {
        date = date.i18n("experience.job3.date");
    }
    let header = Element::new("div")
        .class("experience-header")
        .child(
            Element::new("div")
                .child(
                    Element::new("h3")
                        .class("job-title")
                        .i18n(format!("experience.job{idx}.title"))
                        .text(&job.title),
                )
                .child(Element::new("span").class("company-name").text(&job.company)),
        )
        .child(date.text(&job.date));

    let duties = job.duties.iter().enumerate().map(|(i, duty)| {
        Node::from(
            Element::new("li")
                .i18n(format!("experience.job{idx}.duty{}", i + 1))
                .text(duty),
        )
    });

    let badges = job
        .tech_stack
        .iter()
        .map(|tech| Node::from(Element::new("span").class("tech-badge").text(tech)));

    Element::new("div")
        .class("experience-item")
        .child(header)
        .child(Element::new("ul").class("experience-description").children(duties))
        .child(Element::new("div").class("tech-stack").children(badges))
}

// ── Skills ─────────────────────────────────────────────────────

pub fn render_skills(data: &ResumeData) -> Vec<Element> {
    let frontend = data.skills.frontend.iter().map(|s| match s.glyph() {
        Glyph::Emoji(emoji) => Element::new("span")
            .class("skill-tag")
            .text(format!("{emoji} {}", s.name)),
        Glyph::Icon(src) => icon_tag(s, src, false),
    });
    let backend = data
        .skills
        .backend
        .iter()
        .map(|s| icon_tag(s, s.icon_src(), false));
    let cloud = data
        .skills
        .cloud
        .iter()
        .map(|s| icon_tag(s, s.icon_src(), s.name == "Vercel"));

    vec![
        skill_category("Frontend", frontend),
        skill_category("Backend", backend),
        skill_category("Cloud & Tools", cloud),
    ]
}

fn icon_tag(skill: &Skill, src: &str, invert: bool) -> Element {
    let class = if invert {
        "skill-icon vercel-icon"
    } else {
        "skill-icon"
    };
    Element::new("span")
        .class("skill-tag")
        .child(
            Element::new("img")
                .attr("src", src)
                .attr("alt", &skill.name)
                .class(class),
        )
        .text(&skill.name)
}

fn skill_category(title: &str, tags: impl Iterator<Item = Element>) -> Element {
    Element::new("div")
        .class("skill-category")
        .child(Element::new("h3").class("category-title").text(title))
        .child(
            Element::new("div")
                .class("skill-tags")
                .children(tags.map(Node::from)),
        )
}

// ── Languages ──────────────────────────────────────────────────

pub fn render_languages(data: &ResumeData) -> Vec<Element> {
    data.languages
        .iter()
        .map(|lang| {
            let pct = lang.percentage;
            Element::new("div")
                .class("language-item")
                .child(
                    Element::new("div")
                        .class("language-info")
                        .child(Element::new("span").class("language-name").text(&lang.name))
                        .child(
                            Element::new("span")
                                .class("language-level-text")
                                .text(&lang.level),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("language-progress")
                        .child(
                            Element::new("div").class("progress-bar").child(
                                Element::new("div")
                                    .class(format!(
                                        "progress-fill {}-progress",
                                        lang.name.to_lowercase()
                                    ))
                                    .attr("style", format!("width: {pct}%")),
                            ),
                        )
                        .child(
                            Element::new("span")
                                .class("progress-percentage")
                                .text(format!("{pct}%")),
                        ),
                )
        })
        .collect()
}

// ── Personal info ──────────────────────────────────────────────

/// Content for the intro block: the `h2` name and the `.lead-text` body.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalView {
    pub name: String,
    pub description: Vec<Node>,
}

pub fn render_personal_info(data: &ResumeData) -> PersonalView {
    PersonalView {
        name: data.personal.name.clone(),
        description: highlight_phrase(&data.personal.description, HIGHLIGHT_PHRASE),
    }
}

/// Split `text` so every exact, case-sensitive occurrence of `phrase`
/// becomes a `code.inline-code` element.
pub fn highlight_phrase(text: &str, phrase: &str) -> Vec<Node> {
    if phrase.is_empty() {
        return vec![Node::Text(text.to_string())];
    }
    let mut nodes = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find(phrase) {
        if at > 0 {
            nodes.push(Node::Text(rest[..at].to_string()));
        }
        nodes.push(Node::from(
            Element::new("code").class("inline-code").text(phrase),
        ));
        rest = &rest[at + phrase.len()..];
    }
    if !rest.is_empty() {
        nodes.push(Node::Text(rest.to_string()));
    }
    nodes
}

// ── Education / Contact ────────────────────────────────────────

pub fn render_education(data: &ResumeData) -> Element {
    let edu = &data.education;
    Element::new("div")
        .class("education-item")
        .child(
            Element::new("div")
                .class("education-header")
                .child(
                    Element::new("h3")
                        .class("education-degree")
                        .text(&edu.degree),
                )
                .child(
                    Element::new("span")
                        .class("education-institution")
                        .text(&edu.institution),
                ),
        )
        .child(Element::new("span").class("education-date").text(&edu.date))
}

/// Link targets for `#email-link` and `#telegram-link`. Fields are used
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLinks {
    pub email_href: String,
    pub telegram_href: String,
}

pub fn render_contact(data: &ResumeData) -> ContactLinks {
    ContactLinks {
        email_href: format!("mailto:{}", data.contact.email),
        telegram_href: format!("https://t.me/{}", data.contact.telegram),
    }
}
