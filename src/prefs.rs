/// Persisted display preferences (`language` and `theme` flags).
///
/// In the browser the store is `localStorage` (see `web::storage`); tests
/// use [`MemoryStore`].
use std::collections::HashMap;

use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and of the stored flag.
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(code: &str) -> Option<Theme> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// String key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Read both flags. Absent or unrecognised values fall back to the
    /// defaults (`en`, `light`).
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            language: store
                .get(LANGUAGE_KEY)
                .and_then(|v| Language::parse(&v))
                .unwrap_or_default(),
            theme: store
                .get(THEME_KEY)
                .and_then(|v| Theme::parse(&v))
                .unwrap_or_default(),
        }
    }

    pub fn save_language(store: &mut impl KeyValueStore, language: Language) {
        store.set(LANGUAGE_KEY, language.code());
    }

    pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) {
        store.set(THEME_KEY, theme.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_uses_defaults() {
        let store = MemoryStore::default();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn dark_theme_survives_reload() {
        let mut store = MemoryStore::default();
        Preferences::save_theme(&mut store, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Preferences::load(&store).theme, Theme::Dark);
    }

    #[test]
    fn language_survives_reload() {
        let mut store = MemoryStore::default();
        Preferences::save_language(&mut store, Language::Km);
        assert_eq!(Preferences::load(&store).language, Language::Km);
    }

    #[test]
    fn toggling_twice_restores_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn garbage_flag_falls_back() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "solarized");
        store.set(LANGUAGE_KEY, "fr");
        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}
