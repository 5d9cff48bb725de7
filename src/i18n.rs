//! English/Khmer translation table and the `data-i18n` translator.
//!
//! The table ships inside the binary (`assets/translations.json`). Every
//! element carrying a `data-i18n` key gets its text replaced by
//! `table[language][key]`; keys missing from the table leave the element
//! untouched.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::LoadError;
use crate::node::Node;
use crate::render::{highlight_phrase, HIGHLIGHT_PHRASE};

const BUILTIN_TABLE: &str = include_str!("../assets/translations.json");

/// Key whose translation contains the highlighted phrase and is rendered
/// as rich content instead of plain text.
pub const RICH_KEY: &str = "hero.description";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Km,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Km]
    }

    /// Code used in storage and in `data-lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Km => "km",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "km" => Some(Language::Km),
            _ => None,
        }
    }

    /// Flag image shown on the language toggle button.
    pub fn flag_icon(self) -> &'static str {
        match self {
            Language::En => "assets/flags/gb.svg",
            Language::Km => "assets/flags/kh.svg",
        }
    }

    pub fn flag_alt(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Km => "ខ្មែរ",
        }
    }
}

/// `table[language][key]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The table bundled with the site.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json(BUILTIN_TABLE)
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    #[cfg(test)]
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.entries
            .get(&language)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }
}

/// Something that carries a translation key and can have its content replaced.
pub trait I18nTarget {
    fn i18n_key(&self) -> Option<String>;
    fn set_text(&mut self, text: &str);
    fn set_rich(&mut self, nodes: Vec<Node>);
}

pub struct Translator {
    table: TranslationTable,
}

impl Translator {
    pub fn new(table: TranslationTable) -> Self {
        Self { table }
    }

    /// Apply `language` to every target. Returns how many were rewritten.
    pub fn translate<T: I18nTarget>(&self, language: Language, targets: &mut [T]) -> usize {
        let mut updated = 0;
        for target in targets.iter_mut() {
            let Some(key) = target.i18n_key() else {
                continue;
            };
            let Some(text) = self.table.lookup(language, &key) else {
                continue;
            };
            if key == RICH_KEY {
                target.set_rich(highlight_phrase(text, HIGHLIGHT_PHRASE));
            } else {
                target.set_text(text);
            }
            updated += 1;
        }
        updated
    }
}

/// Visual state of the language switcher after a language is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSelection {
    pub flag_icon: &'static str,
    pub flag_alt: &'static str,
    /// `(code, selected)` for each option, exactly one selected.
    pub options: Vec<(&'static str, bool)>,
}

impl LanguageSelection {
    pub fn for_language(current: Language) -> Self {
        Self {
            flag_icon: current.flag_icon(),
            flag_alt: current.flag_alt(),
            options: Language::all()
                .iter()
                .map(|&l| (l.code(), l == current))
                .collect(),
        }
    }
}
