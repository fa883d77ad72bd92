//! Language registry: metadata for every supported language.
//!
//! Backs the language selector on the settings screen. Initialized once with
//! `OnceLock` and immutable afterwards.

use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Locale code (e.g., "ko", "en", "ja")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Native name of the language (e.g., "한국어")
    pub native_name: &'static str,

    /// Whether this is the default/fallback language (exactly one is true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in selector order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the table does not mark exactly one language as default
    /// (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_korean() {
        let config = LanguageRegistry::get()
            .get_by_code("ko")
            .expect("Korean should be registered");
        assert_eq!(config.name, "Korean");
        assert_eq!(config.native_name, "한국어");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_all_matches_language_enum() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();
        let expected: Vec<_> = Language::ALL.iter().map(|lang| lang.code()).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_default_language_matches_constant() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.code, Language::DEFAULT.code());
    }

    #[test]
    fn test_language_config_serializes() {
        let json = serde_json::to_value(LanguageRegistry::get().default_language()).unwrap();
        assert_eq!(json["code"], "ko");
        assert_eq!(json["is_default"], true);
    }
}
