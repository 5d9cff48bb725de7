//! Small helpers over `web_sys` document access.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::scrollspy::Viewport;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Milliseconds from `performance.now()`, or 0 when unavailable.
pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok()?
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(doc: &Document, selector: &str) -> Option<HtmlElement> {
    query(doc, selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        web_sys::console::warn_1(&format!("addEventListener({event}) failed: {e:?}").into());
    }
    closure.forget();
}

/// Whether the event's target lies inside any of `containers`.
pub fn event_inside(event: &Event, containers: &[&Element]) -> bool {
    let Some(node) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    containers.iter().any(|c| c.contains(Some(&node)))
}

pub fn viewport(window: &Window, doc: &Document) -> Viewport {
    Viewport {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        window_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        document_height: doc
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0),
    }
}

pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
