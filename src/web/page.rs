//! Populates the resume containers of the host document.

use web_sys::Document;

use super::dom;
use super::mount::replace_children;
use crate::config::{selectors, SiteConfig};
use crate::data::ResumeData;
use crate::node::Node;
use crate::render;

fn nodes(elements: Vec<crate::node::Element>) -> Vec<Node> {
    elements.into_iter().map(Node::from).collect()
}

/// Render every section. A container missing from the document skips that
/// section only.
pub fn render_all(doc: &Document, data: &ResumeData, config: &SiteConfig) {
    if let Some(el) = doc.get_element_by_id(selectors::EXPERIENCE_LIST) {
        let items = render::render_experience(data, config.reverse_experience);
        replace_children(doc, &el, &nodes(items));
    }
    if let Some(el) = doc.get_element_by_id(selectors::SKILLS_GRID) {
        replace_children(doc, &el, &nodes(render::render_skills(data)));
    }
    if let Some(el) = doc.get_element_by_id(selectors::LANGUAGES_LIST) {
        replace_children(doc, &el, &nodes(render::render_languages(data)));
    }
    if let Some(el) = doc.get_element_by_id(selectors::EDUCATION_LIST) {
        let item = render::render_education(data);
        replace_children(doc, &el, &[Node::from(item)]);
    }
    if let Some(intro) = dom::query(doc, selectors::INTRO_BLOCK) {
        let view = render::render_personal_info(data);
        if let Ok(Some(name)) = intro.query_selector("h2") {
            name.set_text_content(Some(&view.name));
        }
        if let Ok(Some(lead)) = intro.query_selector(selectors::LEAD_TEXT) {
            replace_children(doc, &lead, &view.description);
        }
    }

    let links = render::render_contact(data);
    if let Some(el) = doc.get_element_by_id(selectors::EMAIL_LINK) {
        let _ = el.set_attribute("href", &links.email_href);
    }
    if let Some(el) = doc.get_element_by_id(selectors::TELEGRAM_LINK) {
        let _ = el.set_attribute("href", &links.telegram_href);
    }
}
