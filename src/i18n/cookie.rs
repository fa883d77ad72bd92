//! `language` cookie codec.
//!
//! Reads the locale out of a raw `Cookie` header and renders the
//! `Set-Cookie` value written whenever the locale changes. Both the client
//! session and the server read the same cookie, so a server-rendered request
//! sees the language the user picked in the browser.

use crate::i18n::Language;
use cookie::Cookie;
use std::fmt;

/// Cookie (and storage key) holding the locale code.
pub const COOKIE_NAME: &str = "language";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Find `name` in a raw `Cookie` header value (`a=1; b=2`).
///
/// The first occurrence wins. Values are trimmed, unquoted and
/// percent-decoded; pairs the parser rejects (no `=`, empty name, invalid
/// UTF-8 after decoding) are skipped.
///
/// # Arguments
/// * `header` - The raw `Cookie` header value
/// * `name` - The cookie name to look for
///
/// # Returns
/// * `Some(value)` for the first well-formed cookie named `name`
/// * `None` if no such cookie exists
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value_trimmed().to_string())
}

/// The `language` cookie as written on every locale change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCookie {
    pub language: Language,
    pub max_age_secs: u64,
}

impl LanguageCookie {
    /// Build the cookie that persists `language` for one year on every path.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            max_age_secs: COOKIE_MAX_AGE_SECS,
        }
    }
}

/// Renders the `Set-Cookie` header value.
impl fmt::Display for LanguageCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            COOKIE_NAME,
            self.language.code(),
            self.max_age_secs
        )
    }
}

/// Client-side cookie access (what `document.cookie` offers a browser page).
pub trait CookieJar {
    /// Read a cookie value by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Store the language cookie.
    fn set(&mut self, cookie: &LanguageCookie);
}

/// In-memory cookie jar that keeps cookies in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCookieJar {
    cookies: Vec<(String, String)>,
    last_set_cookie: Option<String>,
}

impl MemoryCookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a raw `Cookie` header value.
    pub fn from_header(header: &str) -> Self {
        let mut jar = Self::new();
        for cookie in Cookie::split_parse(header).filter_map(Result::ok) {
            if !jar.cookies.iter().any(|(k, _)| k == cookie.name()) {
                jar.cookies
                    .push((cookie.name().to_string(), cookie.value().to_string()));
            }
        }
        jar
    }

    /// Render the jar as a `Cookie` request header value.
    pub fn header(&self) -> String {
        self.cookies
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The most recent `Set-Cookie` value written through this jar.
    pub fn last_set_cookie(&self) -> Option<&str> {
        self.last_set_cookie.as_deref()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        cookie_value(&self.header(), name)
    }

    fn set(&mut self, cookie: &LanguageCookie) {
        let value = cookie.language.code().to_string();
        match self.cookies.iter_mut().find(|(k, _)| k == COOKIE_NAME) {
            Some(entry) => entry.1 = value,
            None => self.cookies.push((COOKIE_NAME.to_string(), value)),
        }
        self.last_set_cookie = Some(cookie.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== cookie_value Tests ====================

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(cookie_value("language=ja", "language"), Some("ja".to_string()));
    }

    #[test]
    fn test_cookie_value_among_others() {
        let header = "session=abc123; language=en; theme=dark";
        assert_eq!(cookie_value(header, "language"), Some("en".to_string()));
        assert_eq!(cookie_value(header, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("session=abc123", "language"), None);
        assert_eq!(cookie_value("", "language"), None);
    }

    #[test]
    fn test_cookie_value_name_must_match_exactly() {
        assert_eq!(cookie_value("xlanguage=en", "language"), None);
        assert_eq!(cookie_value("language_old=en", "language"), None);
    }

    #[test]
    fn test_cookie_value_first_occurrence_wins() {
        assert_eq!(
            cookie_value("language=ja; language=en", "language"),
            Some("ja".to_string())
        );
    }

    #[test]
    fn test_cookie_value_trims_and_unquotes() {
        assert_eq!(
            cookie_value("  language = \"ko\" ;other=1", "language"),
            Some("ko".to_string())
        );
    }

    #[test]
    fn test_cookie_value_percent_decodes() {
        assert_eq!(
            cookie_value("greeting=%ED%95%9C", "greeting"),
            Some("한".to_string())
        );
    }

    #[test]
    fn test_cookie_value_malformed_escape_kept_raw() {
        assert_eq!(cookie_value("x=100%", "x"), Some("100%".to_string()));
        assert_eq!(cookie_value("x=%zz", "x"), Some("%zz".to_string()));
    }

    #[test]
    fn test_cookie_value_non_ascii_sibling() {
        assert_eq!(
            cookie_value("nick=한; language=ja", "language"),
            Some("ja".to_string())
        );
    }

    #[test]
    fn test_jar_from_header_skips_malformed_pairs() {
        let jar = MemoryCookieJar::from_header("garbage; =x; language=ja; language=en");
        assert_eq!(jar.header(), "language=ja");
    }

    #[test]
    fn test_cookie_value_skips_pairs_without_equals() {
        assert_eq!(
            cookie_value("garbage; language=en", "language"),
            Some("en".to_string())
        );
    }

    // ==================== LanguageCookie Tests ====================

    #[test]
    fn test_language_cookie_renders_attributes() {
        let cookie = LanguageCookie::new(Language::Japanese);
        assert_eq!(
            cookie.to_string(),
            "language=ja; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_max_age_is_one_year() {
        assert_eq!(COOKIE_MAX_AGE_SECS, 31_536_000);
    }

    // ==================== MemoryCookieJar Tests ====================

    #[test]
    fn test_jar_from_header_and_get() {
        let jar = MemoryCookieJar::from_header("a=1; language=en");
        assert_eq!(jar.get("language"), Some("en".to_string()));
        assert_eq!(jar.header(), "a=1; language=en");
        assert_eq!(jar.last_set_cookie(), None);
    }

    #[test]
    fn test_jar_set_replaces_in_place() {
        let mut jar = MemoryCookieJar::from_header("a=1; language=en; b=2");
        jar.set(&LanguageCookie::new(Language::Korean));

        assert_eq!(jar.header(), "a=1; language=ko; b=2");
        assert_eq!(
            jar.last_set_cookie(),
            Some("language=ko; Path=/; Max-Age=31536000; SameSite=Lax")
        );
    }

    #[test]
    fn test_jar_set_appends_when_absent() {
        let mut jar = MemoryCookieJar::new();
        jar.set(&LanguageCookie::new(Language::English));
        assert_eq!(jar.header(), "language=en");
    }
}
