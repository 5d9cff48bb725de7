//! Browser glue (wasm32 only). Everything DOM-shaped lives here; the logic
//! it drives is in the crate's platform-independent modules.

mod controls;
mod dom;
mod i18n;
mod loader;
mod mount;
mod page;
mod spy;
mod storage;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::i18n::{TranslationTable, Translator};
use crate::scrollspy::SpyConfig;
use crate::state::AppState;

static CONFIG: SiteConfig = SiteConfig::DEFAULT;

pub fn start() {
    wasm_bindgen_futures::spawn_local(init());
}

/// Page start-up: theme → fetch → render → translate → controls → scroll-spy.
async fn init() {
    let (Some(window), Some(doc)) = (dom::window(), dom::document()) else {
        return;
    };
    let app = Rc::new(RefCell::new(AppState::from_store(storage::LocalStorage::open())));

    let table = TranslationTable::builtin().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("translation table unusable: {e}").into());
        TranslationTable::default()
    });
    let translator = Rc::new(Translator::new(table));

    // Theme does not depend on the data; apply it before the fetch.
    controls::install_theme(&window, &doc, app.clone(), &CONFIG);

    match loader::load_data(CONFIG.data_url).await {
        Ok(data) => page::render_all(&doc, &data, &CONFIG),
        Err(e) => web_sys::console::warn_1(
            &format!("{} の読み込みに失敗: {e}", CONFIG.data_url).into(),
        ),
    }

    let language = app.borrow().language();
    i18n::apply_language(&doc, &translator, language);

    let menu = controls::install_menu(&window, &doc, &CONFIG);
    controls::install_sidebar(&doc);
    controls::install_language_menu(&doc, app.clone(), translator);
    controls::install_print(&window, &doc, &CONFIG);
    controls::install_fade_in(&doc);

    let spy_config = SpyConfig::manual_aware();
    controls::install_anchor_scroll(&window, &doc, spy_config.header_offset);
    spy::install(&window, &doc, spy_config, menu.state, menu.sync);
}
