//! Wires [`ScrollSpy`] to the document: an `IntersectionObserver` on every
//! `section[id]`, scroll/resize/load probes, and nav link clicks.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::dom;
use crate::config::selectors;
use crate::controls::Disclosure;
use crate::scrollspy::{IntersectionSample, NavLink, ScrollSpy, SectionGeometry, SpyConfig};

struct DomNavLink {
    element: Element,
    target: String,
}

impl DomNavLink {
    fn new(element: Element) -> Self {
        let target = element
            .get_attribute("href")
            .map(|h| h.trim_start_matches('#').to_string())
            .unwrap_or_default();
        Self { element, target }
    }
}

impl NavLink for DomNavLink {
    fn target(&self) -> &str {
        &self.target
    }

    fn set_active(&mut self, active: bool) {
        dom::set_class(&self.element, "active", active);
    }
}

type SharedSpy = Rc<RefCell<ScrollSpy<DomNavLink>>>;

fn geometry(sections: &[HtmlElement]) -> Vec<SectionGeometry> {
    sections
        .iter()
        .map(|s| SectionGeometry {
            top: s.offset_top() as f64,
        })
        .collect()
}

fn observe_sections(spy: &SharedSpy, sections: &[HtmlElement]) -> Option<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new({
        let spy = spy.clone();
        move |entries: js_sys::Array| {
            let samples: Vec<IntersectionSample> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|e| IntersectionSample {
                    section_id: e.target().id(),
                    ratio: e.intersection_ratio(),
                    is_intersecting: e.is_intersecting(),
                })
                .collect();
            spy.borrow_mut().on_intersections(&samples, dom::now());
        }
    });

    let init = IntersectionObserverInit::new();
    {
        let spy = spy.borrow();
        let thresholds: js_sys::Array = spy
            .config()
            .thresholds
            .iter()
            .map(|&t| JsValue::from_f64(t))
            .collect();
        init.set_threshold(&thresholds);
        init.set_root_margin(spy.config().root_margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    callback.forget();
    for section in sections {
        observer.observe(section);
    }
    Some(())
}

/// Start tracking. `menu` is closed whenever a nav link is followed.
pub fn install(
    window: &Window,
    doc: &Document,
    config: SpyConfig,
    menu: Rc<RefCell<Disclosure>>,
    on_menu_change: Rc<dyn Fn(bool)>,
) {
    let sections: Vec<HtmlElement> = dom::query_all(doc, selectors::SECTIONS)
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect();
    if sections.is_empty() {
        return;
    }
    let ids = sections.iter().map(|s| s.id()).collect();
    let link_elements = dom::query_all(doc, selectors::NAV_LINKS);
    let links = link_elements.iter().cloned().map(DomNavLink::new).collect();

    let spy: SharedSpy = Rc::new(RefCell::new(ScrollSpy::new(config, ids, links)));
    let sections = Rc::new(sections);

    if observe_sections(&spy, &sections).is_none() {
        web_sys::console::warn_1(&"scrollspy: IntersectionObserver unavailable".into());
    }

    let probe = {
        let spy = spy.clone();
        let sections = sections.clone();
        let window = window.clone();
        let doc = doc.clone();
        move || {
            let vp = dom::viewport(&window, &doc);
            let mut spy = spy.borrow_mut();
            if spy.on_scroll(vp, &geometry(&sections), dom::now()) {
                web_sys::console::log_1(
                    &format!("scrollspy: active={:?}", spy.active_section()).into(),
                );
            }
        }
    };
    let probe = Rc::new(probe);
    for event in ["scroll", "resize", "load"] {
        let probe = probe.clone();
        dom::on(window, event, move |_| probe());
    }
    probe();

    for link in link_elements {
        let spy = spy.clone();
        let window = window.clone();
        let doc = doc.clone();
        let menu = menu.clone();
        let on_menu_change = on_menu_change.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::on(&link, "click", move |event| {
            event.prevent_default();
            if menu.borrow_mut().close() {
                on_menu_change(false);
            }
            let id = href.trim_start_matches('#');
            let Some(section) = doc
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let target = spy
                .borrow_mut()
                .navigate(id, section.offset_top() as f64, dom::now());
            if let Some(top) = target {
                dom::smooth_scroll_to(&window, top);
            }
        });
    }
}
