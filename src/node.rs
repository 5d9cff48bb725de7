//! A minimal element tree produced by the renderers.
//!
//! Renderers stay pure by returning [`Node`]s; the wasm32 glue in
//! `web::mount` turns them into real DOM nodes. Text always becomes a DOM
//! text node, so nothing from `data.json` is ever parsed as markup.

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute (replacing any previous one).
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Attach a translation key (`data-i18n`).
    pub fn i18n(self, key: impl Into<String>) -> Self {
        self.attr("data-i18n", key)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

#[cfg(test)]
impl Element {
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Depth-first search for descendants (not including `self`) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        find_into(&self.children, class, &mut found);
        found
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[cfg(test)]
fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

#[cfg(test)]
fn find_into<'a>(nodes: &'a [Node], class: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.has_class(class) {
                found.push(el);
            }
            find_into(&el.children, class, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_overwrites_existing_value() {
        let el = Element::new("div").class("a").class("b");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.get_attr("class"), Some("b"));
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let el = Element::new("img").class("skill-icon vercel-icon");
        assert!(el.has_class("skill-icon"));
        assert!(el.has_class("vercel-icon"));
        assert!(!el.has_class("skill"));
    }

    #[test]
    fn text_content_is_depth_first() {
        let el = Element::new("p")
            .text("a ")
            .child(Element::new("code").text("b"))
            .text(" c");
        assert_eq!(el.text_content(), "a b c");
    }

    #[test]
    fn find_by_class_descends() {
        let el = Element::new("div").child(
            Element::new("ul")
                .child(Element::new("li").class("x").text("1"))
                .child(Element::new("li").class("x").text("2")),
        );
        let found = el.find_by_class("x");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].text_content(), "2");
    }
}
