//! Locale type: a display language validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry, Translations};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated locale.
///
/// Only codes present in the [`LocaleRegistry`] can be turned into a
/// `Locale`, so anything holding one may index the translation table
/// without a fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const CHINESE: Locale = Locale { code: "zh" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err` if the code is unknown (matching is case-sensitive)
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Pick a locale from an `Accept-Language` header value.
    ///
    /// This is a substring check, not a quality-value negotiation: the first
    /// non-default locale whose token occurs anywhere in the header wins,
    /// otherwise the default locale is used.
    pub fn detect(accept_language: Option<&str>) -> Locale {
        let Some(header) = accept_language else {
            return Locale::default();
        };

        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .filter(|config| !config.is_default)
            .find(|config| header.contains(config.header_token))
            .map(|config| Locale { code: config.code })
            .unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code`, `detect` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn html_lang(&self) -> &'static str {
        self.config().html_lang
    }

    /// Display strings for this locale.
    pub fn strings(&self) -> &'static Translations {
        self.config().strings
    }

    /// The locale the language switch points to.
    pub fn other(&self) -> Locale {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .find(|config| config.code != self.code)
            .map(|config| Locale { code: config.code })
            .unwrap_or(*self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
