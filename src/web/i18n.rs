//! Applies a language to the `[data-i18n]` elements of the document.

use web_sys::{Document, Element};

use super::dom;
use super::mount::replace_children;
use crate::config::selectors;
use crate::i18n::{I18nTarget, Language, LanguageSelection, Translator};
use crate::node::Node;

struct DomTarget(Element);

impl I18nTarget for DomTarget {
    fn i18n_key(&self) -> Option<String> {
        self.0.get_attribute("data-i18n")
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_rich(&mut self, nodes: Vec<Node>) {
        if let Some(doc) = self.0.owner_document() {
            replace_children(&doc, &self.0, &nodes);
        }
    }
}

/// Translate the page and update the switcher. Persisting the choice is
/// the caller's job; start-up only reads it.
pub fn apply_language(doc: &Document, translator: &Translator, language: Language) {
    let mut targets: Vec<DomTarget> = dom::query_all(doc, selectors::I18N)
        .into_iter()
        .map(DomTarget)
        .collect();
    let updated = translator.translate(language, &mut targets);
    web_sys::console::log_1(
        &format!("i18n: applied {} ({updated} elements)", language.code()).into(),
    );

    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", language.code());
    }

    let selection = LanguageSelection::for_language(language);
    if let Some(flag) = dom::query(doc, selectors::LANG_FLAG) {
        let _ = flag.set_attribute("src", selection.flag_icon);
        let _ = flag.set_attribute("alt", selection.flag_alt);
    }
    for option in dom::query_all(doc, selectors::LANG_OPTIONS) {
        let code = option.get_attribute("data-lang").unwrap_or_default();
        let selected = selection
            .options
            .iter()
            .any(|&(c, on)| on && c == code);
        dom::set_class(&option, "selected", selected);
    }
}
