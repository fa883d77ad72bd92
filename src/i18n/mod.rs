//! Internationalization (i18n) module for the settings screen.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` set (`ko`, `en`, `ja`) and `LocaleError`
//! - `registry`: display metadata for the language selector
//! - `strings`: static translation tables with dot-delimited lookup
//! - `cookie`: the `language` cookie codec and client cookie jar
//! - `storage`: client persistent storage for the preference
//! - `resolver`: precedence rules (client: storage, cookie, default; server: cookie)
//! - `session`: the client's active locale with write-through persistence
//! - `validator`: completeness checks across translation tables
//! - `metrics`: lookup and locale-change counters
//!
//! # Example
//!
//! ```rust,ignore
//! use settings_i18n::i18n::{LocaleSession, MemoryCookieJar, MemoryStore};
//!
//! let mut session = LocaleSession::initialize(MemoryStore::new(), MemoryCookieJar::new());
//! session.change_locale("ja")?;
//! assert_eq!(session.t("settings.title"), "設定");
//! ```

pub mod cookie;
mod language;
mod metrics;
mod registry;
pub mod resolver;
mod session;
pub mod storage;
mod strings;
mod validator;

pub use cookie::{CookieJar, LanguageCookie, MemoryCookieJar, COOKIE_MAX_AGE_SECS, COOKIE_NAME};
pub use language::{Language, LocaleError};
pub use metrics::{LocaleMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve_from_cookie_header, resolve_from_request, LocaleSource};
pub use session::LocaleSession;
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use strings::{Messages, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
