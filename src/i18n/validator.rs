//! Translation completeness validation module.
//!
//! Compares every locale's table against the default locale so that a key
//! added for one language is not silently missing from another.

use crate::i18n::{Language, TranslationTable};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors (keys missing from a locale)
    pub errors: Vec<String>,

    /// Non-critical warnings (extra keys, empty strings, placeholder drift)
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

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table completeness.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every locale in `table` against the default locale.
    ///
    /// This function checks that:
    /// - every default-locale key exists in each other locale (error)
    /// - no locale defines keys the default locale lacks (warning)
    /// - no message is an empty string (warning)
    /// - `{name}` placeholders match the default locale's message (warning)
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = table.messages(Language::DEFAULT);
        let reference_keys: BTreeSet<&str> = table.keys(Language::DEFAULT).collect();

        for lang in Language::ALL {
            let messages = table.messages(lang);
            let keys: BTreeSet<&str> = table.keys(lang).collect();

            for missing in reference_keys.difference(&keys) {
                report
                    .errors
                    .push(format!("[{}] missing key '{}'", lang.code(), missing));
            }

            for extra in keys.difference(&reference_keys) {
                report.warnings.push(format!(
                    "[{}] key '{}' is not defined for default locale '{}'",
                    lang.code(),
                    extra,
                    Language::DEFAULT.code()
                ));
            }

            for (key, text) in messages {
                if text.trim().is_empty() {
                    report
                        .warnings
                        .push(format!("[{}] empty message for '{}'", lang.code(), key));
                }

                if let Some(reference_text) = reference.get(key) {
                    let expected = Self::extract_placeholders(reference_text);
                    let actual = Self::extract_placeholders(text);
                    if expected != actual {
                        report.warnings.push(format!(
                            "[{}] placeholder mismatch for '{}': default has {:?}, found {:?}",
                            lang.code(),
                            key,
                            expected,
                            actual
                        ));
                    }
                }
            }
        }

        report
    }

    /// Extract `{name}` placeholders from a message, sorted and deduplicated.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("placeholder regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
