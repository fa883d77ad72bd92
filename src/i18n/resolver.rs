//! Locale resolution precedence.
//!
//! The client resolves the initial locale from [`LocaleSource::PRIORITY`]:
//! persistent storage, then the cookie, then the default. The server has no
//! client storage and reads only the request's `cookie` header.

use crate::i18n::cookie::{cookie_value, CookieJar, COOKIE_NAME};
use crate::i18n::storage::PreferenceStore;
use crate::i18n::Language;
use axum::http::{header::COOKIE, HeaderMap};
use tracing::{debug, warn};

/// Where a resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// Client persistent storage (`language` key)
    Storage,
    /// The `language` cookie
    Cookie,
    /// Nothing valid was found
    Default,
}

impl LocaleSource {
    /// Client-side resolution order, highest priority first.
    pub const PRIORITY: [LocaleSource; 3] = [
        LocaleSource::Storage,
        LocaleSource::Cookie,
        LocaleSource::Default,
    ];

    /// Lower-case name used in logs and the CLI (`storage`, `cookie`, `default`).
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleSource::Storage => "storage",
            LocaleSource::Cookie => "cookie",
            LocaleSource::Default => "default",
        }
    }
}

/// Validate a raw value found in `source`. Invalid values are logged and dropped.
fn accept(source: LocaleSource, raw: Option<String>) -> Option<Language> {
    let raw = raw?;
    match Language::from_code(&raw) {
        Ok(lang) => Some(lang),
        Err(e) => {
            warn!(source = source.as_str(), error = %e, "ignoring persisted locale");
            None
        }
    }
}

/// Resolve the client's initial locale by walking [`LocaleSource::PRIORITY`].
///
/// When neither storage nor cookie hold a valid code, the default is written
/// to storage. The cookie is never written here.
pub fn resolve_client<S, C>(storage: &mut S, cookies: &C) -> (Language, LocaleSource)
where
    S: PreferenceStore + ?Sized,
    C: CookieJar + ?Sized,
{
    for source in LocaleSource::PRIORITY {
        let found = match source {
            LocaleSource::Storage => accept(source, storage.get(COOKIE_NAME)),
            LocaleSource::Cookie => accept(source, cookies.get(COOKIE_NAME)),
            LocaleSource::Default => break,
        };

        if let Some(lang) = found {
            debug!(locale = lang.code(), source = source.as_str(), "resolved client locale");
            return (lang, source);
        }
    }

    storage.set(COOKIE_NAME, Language::DEFAULT.code());
    debug!(locale = Language::DEFAULT.code(), "no saved locale, storing default");
    (Language::DEFAULT, LocaleSource::Default)
}

/// Resolve the locale for an incoming request.
///
/// `None` (no headers at all) yields the default. Only the `cookie` header is
/// consulted; multiple `cookie` headers are read as one list. Header bytes
/// are decoded lossily so a non-ASCII sibling cookie cannot hide `language`.
pub fn resolve_from_request(headers: Option<&HeaderMap>) -> Language {
    let Some(headers) = headers else {
        return Language::DEFAULT;
    };

    let joined = headers
        .get_all(COOKIE)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect::<Vec<_>>()
        .join("; ");

    resolve_from_cookie_header((!joined.is_empty()).then_some(joined.as_str()))
}

/// Resolve the locale from a raw `Cookie` header value.
pub fn resolve_from_cookie_header(header: Option<&str>) -> Language {
    header
        .and_then(|header| accept(LocaleSource::Cookie, cookie_value(header, COOKIE_NAME)))
        .unwrap_or(Language::DEFAULT)
}
