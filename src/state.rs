//! Application state shared by the event handlers.
//!
//! Owns the persisted preferences and the store they live in, so handlers
//! never touch storage directly. The active section is owned by
//! [`crate::scrollspy::ScrollSpy`].

use crate::i18n::Language;
use crate::prefs::{KeyValueStore, Preferences, Theme};

pub struct AppState<S: KeyValueStore> {
    store: S,
    prefs: Preferences,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn from_store(store: S) -> Self {
        let prefs = Preferences::load(&store);
        Self { store, prefs }
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.prefs.language = language;
        Preferences::save_language(&mut self.store, language);
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    /// Flip and persist the theme. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.prefs.theme.toggled();
        self.prefs.theme = theme;
        Preferences::save_theme(&mut self.store, theme);
        theme
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
