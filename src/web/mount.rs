//! Turns renderer output into real DOM nodes.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::node::Node;

fn build(doc: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(doc.create_text_node(text).into()),
        Node::Element(el) => {
            let dom = doc.create_element(el.tag)?;
            for (name, value) in &el.attrs {
                dom.set_attribute(name, value)?;
            }
            for child in &el.children {
                dom.append_child(&build(doc, child)?)?;
            }
            Ok(dom.into())
        }
    }
}

/// Clear `parent` and append `nodes` in order.
pub fn replace_children(doc: &Document, parent: &web_sys::Element, nodes: &[Node]) {
    parent.set_text_content(None);
    for node in nodes {
        let result = build(doc, node).and_then(|n| parent.append_child(&n));
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("mount failed: {e:?}").into());
            return;
        }
    }
}
