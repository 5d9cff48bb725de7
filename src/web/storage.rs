//! `localStorage`-backed preference store.

use crate::prefs::KeyValueStore;

pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl LocalStorage {
    /// Storage may be unavailable (private mode, disabled); reads then
    /// return `None` and writes are dropped.
    pub fn open() -> Self {
        Self {
            storage: get_storage(),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            web_sys::console::warn_1(
                &format!("localStorage への保存に失敗 ({key}): {e:?}").into(),
            );
        }
    }
}
