//! Language type: the closed set of locales the settings screen ships with.
//!
//! Any code outside `{ko, en, ja}` is rejected with [`LocaleError::Unsupported`].
//! Matching is exact: `"KO"`, `" ko"` and `"ko-KR"` are all rejected, so a
//! value that round-trips through storage or a cookie is always one of the
//! three codes below.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating a locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The requested code is not one of the supported locales.
    #[error("Unsupported language: '{0}'")]
    Unsupported(String),
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    /// The locale used when nothing else resolves, and the translation fallback.
    pub const DEFAULT: Language = Language::Korean;

    /// Every supported locale, default first.
    pub const ALL: [Language; 3] = [Language::Korean, Language::English, Language::Japanese];

    /// Create a Language from a locale code string.
    ///
    /// # Arguments
    /// * `code` - The locale code; matched exactly, with no trimming or case folding
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of `ko`, `en`, `ja`
    /// * `Err(LocaleError::Unsupported)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LocaleError> {
        match code {
            "ko" => Ok(Language::Korean),
            "en" => Ok(Language::English),
            "ja" => Ok(Language::Japanese),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }

    /// Get the locale code (e.g., "ko").
    pub const fn code(self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    /// Get the registry entry for this language.
    ///
    /// # Panics
    /// Panics if the registry has no entry for this code. Every variant is
    /// registered, so this only fires on a broken registry table.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Every Language variant must be registered")
    }

    /// English name of the language (e.g., "Korean").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Name of the language in the language itself (e.g., "한국어").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
