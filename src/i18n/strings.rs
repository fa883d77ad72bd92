//! Translation tables for the settings screen.
//!
//! Each locale's messages live in `locales/<code>.json` as a nested tree and
//! are compiled into the binary. At first use the trees are flattened into
//! dot-delimited keys (`settings.notifications.email.title`); the table is
//! immutable afterwards.

use crate::i18n::{Language, LocaleMetrics};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::{debug, error, warn};

/// Flattened `key -> text` messages for one locale, sorted by key.
pub type Messages = BTreeMap<String, String>;

/// Static translation data for every supported locale.
#[derive(Debug)]
pub struct TranslationTable {
    tables: HashMap<Language, Messages>,
}

static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the process-wide table built from the bundled resources.
    pub fn global() -> &'static TranslationTable {
        TABLE.get_or_init(TranslationTable::bundled)
    }

    fn bundled() -> Self {
        let mut table = Self::empty();
        for lang in Language::ALL {
            table.insert_json(lang, bundled_source(lang));
        }
        table
    }

    fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Build a table from raw JSON sources, one per locale.
    ///
    /// A source that fails to parse degrades to an empty table for that
    /// locale and is logged; lookups then fall back to the default locale.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Language, &'a str)>) -> Self {
        let mut table = Self::empty();
        for (lang, raw) in sources {
            table.insert_json(lang, raw);
        }
        table
    }

    fn insert_json(&mut self, lang: Language, raw: &str) {
        let messages = match serde_json::from_str::<Value>(raw) {
            Ok(tree) => {
                let mut messages = Messages::new();
                flatten(lang, "", &tree, &mut messages);
                messages
            }
            Err(err) => {
                error!(
                    error = %err,
                    locale = lang.code(),
                    "failed to parse translation resource"
                );
                Messages::new()
            }
        };
        self.tables.insert(lang, messages);
    }

    /// Look up a dot-delimited key in one locale, without fallback.
    ///
    /// Only leaf strings resolve; a key naming an interior node is a miss.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// Translate a key: requested locale, then the default locale, then the key itself.
    pub fn translate<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        self.translate_with(LocaleMetrics::global(), lang, key)
    }

    pub(crate) fn translate_with<'a>(
        &'a self,
        metrics: &LocaleMetrics,
        lang: Language,
        key: &'a str,
    ) -> &'a str {
        if let Some(text) = self.lookup(lang, key) {
            metrics.record_hit();
            return text;
        }

        if lang != Language::DEFAULT {
            if let Some(text) = self.lookup(Language::DEFAULT, key) {
                debug!(key, locale = lang.code(), "falling back to default locale");
                metrics.record_fallback();
                return text;
            }
        }

        debug!(key, locale = lang.code(), "missing translation key");
        metrics.record_missing_key();
        key
    }

    /// All messages for one locale (empty if the locale failed to load).
    pub fn messages(&self, lang: Language) -> &Messages {
        static EMPTY: Messages = Messages::new();
        self.tables.get(&lang).unwrap_or(&EMPTY)
    }

    /// Keys defined for one locale, in sorted order.
    pub fn keys(&self, lang: Language) -> impl Iterator<Item = &str> {
        self.messages(lang).keys().map(String::as_str)
    }
}

fn bundled_source(lang: Language) -> &'static str {
    match lang {
        Language::Korean => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/ko.json")),
        Language::English => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.json")),
        Language::Japanese => {
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/ja.json"))
        }
    }
}

fn flatten(lang: Language, prefix: &str, node: &Value, out: &mut Messages) {
    match node {
        Value::Object(map) => {
            for (segment, child) in map {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten(lang, &path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            warn!(
                locale = lang.code(),
                key = prefix,
                kind = value_kind(other),
                "skipping non-string translation value"
            );
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TranslationTable {
        TranslationTable::from_sources([
            (
                Language::Korean,
                r#"{"settings": {"title": "설정", "saveButton": "설정 저장", "only": {"ko": "한국어만"}}}"#,
            ),
            (Language::English, r#"{"settings": {"title": "Settings"}}"#),
            (Language::Japanese, "{ not json"),
        ])
    }

    // ==================== Bundled Table Tests ====================

    #[test]
    fn test_bundled_lookup_nested_key() {
        let table = TranslationTable::global();
        assert_eq!(
            table.lookup(Language::English, "settings.notifications.email.title"),
            Some("Email Notifications")
        );
        assert_eq!(
            table.lookup(Language::Korean, "settings.notifications.email.title"),
            Some("이메일 알림")
        );
        assert_eq!(
            table.lookup(Language::Japanese, "settings.notifications.email.title"),
            Some("メール通知")
        );
    }

    #[test]
    fn test_bundled_top_level_leaves() {
        let table = TranslationTable::global();
        assert_eq!(
            table.lookup(Language::English, "settings.saveButton"),
            Some("Save Settings")
        );
        assert_eq!(
            table.lookup(Language::Japanese, "settings.savedMessage"),
            Some("設定が保存されました。")
        );
    }

    #[test]
    fn test_bundled_tables_share_key_sets() {
        let table = TranslationTable::global();
        let default_keys: Vec<_> = table.keys(Language::DEFAULT).collect();
        assert!(!default_keys.is_empty());
        for lang in Language::ALL {
            let keys: Vec<_> = table.keys(lang).collect();
            assert_eq!(keys, default_keys, "key set differs for {lang}");
        }
    }

    #[test]
    fn test_bundled_contains_language_selector_text() {
        let table = TranslationTable::global();
        assert_eq!(
            table.lookup(Language::Korean, "settings.system.language.title"),
            Some("언어")
        );
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_interior_node_is_miss() {
        let table = TranslationTable::global();
        assert_eq!(table.lookup(Language::English, "settings.notifications"), None);
        assert_eq!(table.lookup(Language::English, "settings"), None);
    }

    #[test]
    fn test_lookup_unknown_key() {
        let table = TranslationTable::global();
        assert_eq!(table.lookup(Language::English, "settings.nope"), None);
        assert_eq!(table.lookup(Language::English, ""), None);
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_hit() {
        let table = sample_table();
        let metrics = LocaleMetrics::new();
        assert_eq!(
            table.translate_with(&metrics, Language::English, "settings.title"),
            "Settings"
        );
        assert_eq!(metrics.lookups_hit(), 1);
    }

    #[test]
    fn test_translate_falls_back_to_default_locale() {
        let table = sample_table();
        let metrics = LocaleMetrics::new();
        assert_eq!(
            table.translate_with(&metrics, Language::English, "settings.saveButton"),
            "설정 저장"
        );
        assert_eq!(metrics.fallbacks(), 1);
    }

    #[test]
    fn test_translate_missing_returns_key() {
        let table = sample_table();
        let metrics = LocaleMetrics::new();
        assert_eq!(
            table.translate_with(&metrics, Language::English, "settings.unknown"),
            "settings.unknown"
        );
        assert_eq!(
            table.translate_with(&metrics, Language::Korean, "settings.unknown"),
            "settings.unknown"
        );
        assert_eq!(metrics.missing_keys(), 2);
        assert_eq!(metrics.fallbacks(), 0);
    }

    #[test]
    fn test_unparseable_source_degrades_to_empty() {
        let table = sample_table();
        assert!(table.messages(Language::Japanese).is_empty());
        assert_eq!(
            table.translate(Language::Japanese, "settings.title"),
            "설정"
        );
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let table = TranslationTable::from_sources([(
            Language::Korean,
            r#"{"a": {"b": "text", "n": 3, "list": ["x"], "flag": true}}"#,
        )]);
        let keys: Vec<_> = table.keys(Language::Korean).collect();
        assert_eq!(keys, vec!["a.b"]);
    }

    #[test]
    fn test_missing_locale_has_no_messages() {
        let table = TranslationTable::from_sources([(Language::Korean, "{}")]);
        assert!(table.messages(Language::English).is_empty());
    }
}
