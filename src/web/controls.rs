//! Theme toggle, mobile menu, sidebar, language dropdown, print button,
//! plain anchor smooth-scroll and the fade-in reveal.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Window,
};

use super::dom;
use super::i18n::apply_language;
use super::storage::LocalStorage;
use super::timer::Timeout;
use crate::config::{selectors, SiteConfig};
use crate::controls::{fade_in_delay_css, navbar_style, Disclosure};
use crate::i18n::{Language, Translator};
use crate::prefs::Theme;
use crate::state::AppState;

type SharedApp = Rc<RefCell<AppState<LocalStorage>>>;

// ── Theme / navbar ─────────────────────────────────────────────

fn apply_theme(doc: &Document, theme: Theme) {
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.code());
    }
}

fn update_navbar(window: &Window, doc: &Document, theme: Theme, config: &SiteConfig) {
    let Some(navbar) = dom::query_html(doc, selectors::NAVBAR) else {
        return;
    };
    let style = navbar_style(
        theme,
        window.scroll_y().unwrap_or(0.0),
        config.navbar_scroll_threshold_px,
    );
    dom::set_style(&navbar, "background", style.background);
    dom::set_style(&navbar, "box-shadow", style.box_shadow);
}

pub fn install_theme(window: &Window, doc: &Document, app: SharedApp, config: &'static SiteConfig) {
    apply_theme(doc, app.borrow().theme());
    update_navbar(window, doc, app.borrow().theme(), config);

    if let Some(toggle) = dom::query(doc, selectors::THEME_TOGGLE) {
        let app = app.clone();
        let window = window.clone();
        let doc = doc.clone();
        dom::on(&toggle, "click", move |_| {
            let theme = app.borrow_mut().toggle_theme();
            apply_theme(&doc, theme);
            update_navbar(&window, &doc, theme, config);
        });
    }

    for event in ["scroll", "load"] {
        let app = app.clone();
        let w = window.clone();
        let doc = doc.clone();
        dom::on(window, event, move |_| {
            update_navbar(&w, &doc, app.borrow().theme(), config);
        });
    }
}

// ── Mobile menu ────────────────────────────────────────────────

pub struct MenuHandle {
    pub state: Rc<RefCell<Disclosure>>,
    /// Mirrors an open/closed state onto the menu classes.
    pub sync: Rc<dyn Fn(bool)>,
}

pub fn install_menu(window: &Window, doc: &Document, config: &'static SiteConfig) -> MenuHandle {
    let state = Rc::new(RefCell::new(Disclosure::default()));
    let menu = dom::query(doc, selectors::NAV_MENU);
    let toggle = dom::query(doc, selectors::MENU_TOGGLE);

    let sync: Rc<dyn Fn(bool)> = {
        let menu = menu.clone();
        let toggle = toggle.clone();
        Rc::new(move |open| {
            for el in menu.iter().chain(toggle.iter()) {
                dom::set_class(el, "active", open);
            }
        })
    };

    let (Some(menu), Some(toggle)) = (menu, toggle) else {
        return MenuHandle { state, sync };
    };

    {
        let state = state.clone();
        let sync = sync.clone();
        dom::on(&toggle, "click", move |_| {
            let open = state.borrow_mut().toggle();
            sync(open);
        });
    }
    {
        let state = state.clone();
        let sync = sync.clone();
        let (menu, toggle) = (menu.clone(), toggle.clone());
        dom::on(doc, "click", move |event| {
            let inside = dom::event_inside(&event, &[&menu, &toggle]);
            if state.borrow_mut().on_outside_click(inside) {
                sync(false);
            }
        });
    }
    {
        let state = state.clone();
        let sync = sync.clone();
        let timeout = Rc::new(RefCell::new(Timeout::default()));
        let w = window.clone();
        dom::on(window, "resize", move |_| {
            let state = state.clone();
            let sync = sync.clone();
            let w = w.clone();
            timeout
                .borrow_mut()
                .schedule(config.resize_debounce_ms, move || {
                    let width = dom::inner_width(&w);
                    if state.borrow_mut().on_resize(width, config.menu_breakpoint_px) {
                        sync(false);
                    }
                });
        });
    }

    MenuHandle { state, sync }
}

// ── Sidebar ────────────────────────────────────────────────────

pub fn install_sidebar(doc: &Document) {
    let Some(sidebar) = dom::query(doc, selectors::SIDEBAR) else {
        return;
    };
    let overlay = dom::query(doc, selectors::SIDEBAR_OVERLAY);
    let state = Rc::new(RefCell::new(Disclosure::default()));
    let sync = Rc::new(move |open: bool| {
        dom::set_class(&sidebar, "active", open);
        if let Some(o) = &overlay {
            dom::set_class(o, "active", open);
        }
    });

    if let Some(toggle) = dom::query(doc, selectors::SIDEBAR_TOGGLE) {
        let state = state.clone();
        let sync = sync.clone();
        dom::on(&toggle, "click", move |_| {
            state.borrow_mut().open();
            sync(true);
        });
    }
    let closers = [selectors::SIDEBAR_CLOSE, selectors::SIDEBAR_OVERLAY]
        .into_iter()
        .filter_map(|sel| dom::query(doc, sel));
    for closer in closers {
        let state = state.clone();
        let sync = sync.clone();
        dom::on(&closer, "click", move |_| {
            if state.borrow_mut().close() {
                sync(false);
            }
        });
    }
    dom::on(doc, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if is_escape && state.borrow_mut().close() {
            sync(false);
        }
    });
}

// ── Language dropdown ──────────────────────────────────────────

pub fn install_language_menu(doc: &Document, app: SharedApp, translator: Rc<Translator>) {
    let (Some(switcher), Some(dropdown)) = (
        dom::query(doc, selectors::LANG_SWITCHER),
        dom::query(doc, selectors::LANG_MENU),
    ) else {
        return;
    };
    let state = Rc::new(RefCell::new(Disclosure::default()));

    if let Some(toggle) = dom::query(doc, selectors::LANG_TOGGLE) {
        let state = state.clone();
        let dropdown = dropdown.clone();
        dom::on(&toggle, "click", move |_| {
            let open = state.borrow_mut().toggle();
            dom::set_class(&dropdown, "show", open);
        });
    }

    for option in dom::query_all(doc, selectors::LANG_OPTIONS) {
        let Some(language) = option
            .get_attribute("data-lang")
            .and_then(|c| Language::parse(&c))
        else {
            continue;
        };
        let state = state.clone();
        let dropdown = dropdown.clone();
        let app = app.clone();
        let translator = translator.clone();
        let doc = doc.clone();
        dom::on(&option, "click", move |_| {
            app.borrow_mut().set_language(language);
            apply_language(&doc, &translator, language);
            state.borrow_mut().close();
            dom::set_class(&dropdown, "show", false);
        });
    }

    dom::on(doc, "click", move |event| {
        let inside = dom::event_inside(&event, &[&switcher]);
        if state.borrow_mut().on_outside_click(inside) {
            dom::set_class(&dropdown, "show", false);
        }
    });
}

// ── Print / anchors ────────────────────────────────────────────

pub fn install_print(window: &Window, doc: &Document, config: &'static SiteConfig) {
    let Some(button) = dom::query(doc, selectors::PRINT_BUTTON) else {
        return;
    };
    let window = window.clone();
    dom::on(&button, "click", move |_| {
        if let Err(e) = window.open_with_url_and_target(config.print_url, "_blank") {
            web_sys::console::warn_1(&format!("print view failed: {e:?}").into());
        }
    });
}

/// Smooth scroll for in-page anchors outside the nav menu (nav links are
/// handled by the scroll-spy).
pub fn install_anchor_scroll(window: &Window, doc: &Document, header_offset: f64) {
    for anchor in dom::query_all(doc, selectors::ANCHORS) {
        if let Ok(Some(_)) = anchor.closest(selectors::NAV_MENU) {
            continue;
        }
        let href = anchor.get_attribute("href").unwrap_or_default();
        let window = window.clone();
        let doc = doc.clone();
        dom::on(&anchor, "click", move |event| {
            event.prevent_default();
            let target = dom::query(&doc, &href).and_then(|e| e.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                dom::smooth_scroll_to(&window, target.offset_top() as f64 - header_offset);
            }
        });
    }
}

// ── Fade-in ────────────────────────────────────────────────────

/// Hide skill categories and contact links until they scroll into view.
/// Must run after the skills section is rendered.
pub fn install_fade_in(doc: &Document) {
    for (ci, category) in dom::query_all(doc, selectors::SKILL_CATEGORIES)
        .into_iter()
        .enumerate()
    {
        let Ok(tags) = category.query_selector_all(selectors::SKILL_TAGS) else {
            continue;
        };
        for ti in 0..tags.length() {
            if let Some(tag) = tags.get(ti).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                dom::set_style(&tag, "transition-delay", &fade_in_delay_css(ci, ti as usize));
            }
        }
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries
            .iter()
            .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(|e| e.is_intersecting())
        {
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                dom::set_style(&el, "opacity", "1");
                dom::set_style(&el, "transform", "translateY(0)");
            }
        }
    });
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -50px 0px");
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    callback.forget();

    for el in dom::query_all(doc, selectors::FADE_IN)
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
    {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(20px)");
        dom::set_style(&el, "transition", "opacity 0.6s ease-out, transform 0.6s ease-out");
        observer.observe(&el);
    }
}
