//! Translation table validation.
//!
//! Checks every locale's table against the default locale's: entries must be
//! non-empty, carry the same `{placeholder}` set, and timestamp formats must
//! be valid chrono format strings.

use crate::i18n::{LocaleRegistry, Translations};
use chrono::format::{Item, StrftimeItems};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Entries that would render incorrectly
    pub errors: Vec<String>,

    /// Entries that render but look suspicious
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every registered locale against the default locale.
    pub fn validate_all() -> ValidationReport {
        let registry = LocaleRegistry::get();
        let canonical = registry.default_locale();
        let mut report = ValidationReport::new();

        for config in registry.list_all() {
            let locale_report = Self::validate(canonical.strings, config.strings);
            report.errors.extend(
                locale_report
                    .errors
                    .into_iter()
                    .map(|e| format!("[{}] {}", config.code, e)),
            );
            report.warnings.extend(
                locale_report
                    .warnings
                    .into_iter()
                    .map(|w| format!("[{}] {}", config.code, w)),
            );
        }

        report
    }

    /// Validate one table against the canonical one.
    pub fn validate(canonical: &Translations, candidate: &Translations) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((key, original), (_, translated)) in
            canonical.entries().into_iter().zip(candidate.entries())
        {
            if translated.trim().is_empty() {
                report.errors.push(format!("Empty entry: {}", key));
                continue;
            }

            let orig_placeholders = Self::extract_placeholders(original);
            let trans_placeholders = Self::extract_placeholders(translated);
            if orig_placeholders != trans_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch in {}: expected {:?}, found {:?}",
                    key, orig_placeholders, trans_placeholders
                ));
            }

            if !std::ptr::eq(canonical, candidate)
                && translated == original
                && !Self::may_match_canonical(key)
            {
                report
                    .warnings
                    .push(format!("Entry identical to canonical text: {}", key));
            }
        }

        if Self::has_invalid_format(candidate.notification.timestamp_format) {
            report.errors.push(format!(
                "Invalid timestamp format: {}",
                candidate.notification.timestamp_format
            ));
        }

        report
    }

    /// Brand names are not translated.
    fn may_match_canonical(key: &str) -> bool {
        key == "nav.brand"
    }

    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    fn has_invalid_format(format: &str) -> bool {
        StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}
