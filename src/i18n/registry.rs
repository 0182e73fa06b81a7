//! Locale registry: Single source of truth for all supported display languages.
//!
//! The registry is a process-wide singleton built on first access with
//! `OnceLock` and never mutated afterwards, so it can be read from any number
//! of request handlers without locking.

use crate::i18n::strings::{Translations, CHINESE_STRINGS, ENGLISH_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Path segment and payload code (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Name shown on the language switch (e.g., "English", "中文")
    pub native_name: &'static str,

    /// BCP 47 tag used for the document `lang` attribute
    pub html_lang: &'static str,

    /// Substring that selects this locale when found in an `Accept-Language` header
    pub header_token: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Display strings for every page section
    pub strings: &'static Translations,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is case-sensitive: `"EN"` is not a supported locale.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, default first.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// The default locale configuration.
    ///
    /// # Panics
    /// Panics if the built-in table does not define exactly one default
    /// locale (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Built-in locale table. English is the default.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            html_lang: "en-US",
            header_token: "en",
            is_default: true,
            strings: &ENGLISH_STRINGS,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            html_lang: "zh-CN",
            header_token: "zh",
            is_default: false,
            strings: &CHINESE_STRINGS,
        },
    ]
}
