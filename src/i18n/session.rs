//! Client locale session.
//!
//! Owns the active locale for one client session together with the two sinks
//! it is persisted to. All mutation goes through `&mut self`, so the session
//! has exactly one writer.

use crate::i18n::cookie::{CookieJar, LanguageCookie, COOKIE_NAME};
use crate::i18n::resolver::{resolve_client, LocaleSource};
use crate::i18n::storage::PreferenceStore;
use crate::i18n::{Language, LocaleError, LocaleMetrics, TranslationTable};
use tracing::{info, warn};

/// Active locale of one client session plus its two persistence sinks.
pub struct LocaleSession<S, C> {
    active: Language,
    source: LocaleSource,
    storage: S,
    cookies: C,
}

impl<S: PreferenceStore, C: CookieJar> LocaleSession<S, C> {
    /// Start a session from persisted state.
    ///
    /// Walks [`LocaleSource::PRIORITY`]; if nothing valid is persisted the
    /// default locale is written to storage. The cookie is left untouched.
    pub fn initialize(storage: S, cookies: C) -> Self {
        let mut session = Self {
            active: Language::DEFAULT,
            source: LocaleSource::Default,
            storage,
            cookies,
        };
        session.sync_from_persisted();
        session
    }

    /// Re-resolve from storage and cookie, switching only if the result differs.
    pub fn sync_from_persisted(&mut self) -> Language {
        let (resolved, source) = resolve_client(&mut self.storage, &self.cookies);
        self.source = source;
        if resolved != self.active {
            info!(
                from = self.active.code(),
                to = resolved.code(),
                source = source.as_str(),
                "restored saved locale"
            );
            self.active = resolved;
        }
        self.active
    }

    /// Currently active locale.
    pub fn active(&self) -> Language {
        self.active
    }

    /// Which source the last resolution used.
    pub fn source(&self) -> LocaleSource {
        self.source
    }

    /// Switch locale from a raw code and persist it to storage and cookie.
    ///
    /// An unsupported code changes nothing: a warning is logged and the error
    /// is returned so callers may surface it, but ignoring it is fine.
    ///
    /// # Arguments
    /// * `requested` - The locale code to switch to (e.g., "ja")
    ///
    /// # Returns
    /// * `Ok(Language)` once storage and cookie hold the new code
    /// * `Err(LocaleError::Unsupported)` if the code is not `ko`, `en` or `ja`
    pub fn change_locale(&mut self, requested: &str) -> Result<Language, LocaleError> {
        self.change_locale_with(LocaleMetrics::global(), requested)
    }

    pub(crate) fn change_locale_with(
        &mut self,
        metrics: &LocaleMetrics,
        requested: &str,
    ) -> Result<Language, LocaleError> {
        match Language::from_code(requested) {
            Ok(lang) => {
                self.apply(lang);
                metrics.record_change_accepted();
                Ok(lang)
            }
            Err(e) => {
                warn!(requested, active = self.active.code(), "{}", e);
                metrics.record_change_rejected();
                Err(e)
            }
        }
    }

    fn apply(&mut self, lang: Language) {
        self.active = lang;
        self.storage.set(COOKIE_NAME, lang.code());
        self.cookies.set(&LanguageCookie::new(lang));
        info!(locale = lang.code(), "locale changed");
    }

    /// Translate a dot-delimited key in the active locale.
    ///
    /// # Arguments
    /// * `key` - A path such as `settings.notifications.email.title`
    ///
    /// # Returns
    /// The active locale's text, the default locale's text, or `key` itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        TranslationTable::global().translate(self.active, key)
    }

    /// Client persistent storage backing this session.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Cookie jar backing this session.
    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    /// Hand back the sinks, e.g. to flush them somewhere else.
    pub fn into_parts(self) -> (S, C) {
        (self.storage, self.cookies)
    }
}
