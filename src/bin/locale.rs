//! Locale binary - drives a client locale session from the command line
//!
//! Usage:
//!   cargo run --bin locale -- show              # Print the active locale and where it came from
//!   cargo run --bin locale -- set ja            # Change locale (writes storage and cookie)
//!                                               # (an unsupported code is reported, exit status stays 0)
//!   cargo run --bin locale -- t settings.title  # Translate a key in the active locale
//!
//! Optional environment variables:
//! - LOCALE_STORE_PATH (defaults to data/locale.json)
//! - COOKIE_JAR_PATH (defaults to data/cookies.txt)

use anyhow::{bail, Context, Result};
use settings_i18n::config::Config;
use settings_i18n::i18n::{FileStore, LocaleSession, MemoryCookieJar, PreferenceStore};
use std::fs;
use std::path::Path;
use tracing::info;

fn load_cookie_jar(path: &Path) -> MemoryCookieJar {
    fs::read_to_string(path)
        .map(|header| MemoryCookieJar::from_header(header.trim()))
        .unwrap_or_default()
}

fn save_cookie_jar(path: &Path, jar: &MemoryCookieJar) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, jar.header())
        .with_context(|| format!("Failed to write cookie jar {}", path.display()))
}

/// Apply `set <code>` and persist the cookie jar.
///
/// # Returns
/// * `Ok(line)` with the text to print; an unsupported code is reported here
///   rather than failing the command
/// * `Err` only if the cookie jar cannot be written
fn run_set<S: PreferenceStore>(
    mut session: LocaleSession<S, MemoryCookieJar>,
    cookie_path: &Path,
    code: &str,
) -> Result<String> {
    match session.change_locale(code) {
        Ok(lang) => {
            let line = session.t("settings.savedMessage").to_string();
            let (_, cookies) = session.into_parts();
            save_cookie_jar(cookie_path, &cookies)?;
            info!("Saved locale {}", lang);
            Ok(line)
        }
        // Rejected codes leave every sink untouched
        Err(e) => Ok(format!("{} (keeping {})", e, session.active())),
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("settings_i18n=warn".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let cookie_path = Path::new(&config.cookie_jar_path);

    let session = LocaleSession::initialize(
        FileStore::new(&config.locale_store_path),
        load_cookie_jar(cookie_path),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["show"] => {
            let lang = session.active();
            println!(
                "{} ({} / {}, from {})",
                lang.code(),
                lang.name(),
                lang.native_name(),
                session.source().as_str()
            );
        }
        ["set", code] => {
            println!("{}", run_set(session, cookie_path, code)?);
        }
        ["t", key] => {
            println!("{}", session.t(key));
        }
        other => bail!(
            "Unknown arguments {:?}. Usage: locale [show | set <ko|en|ja> | t <key>]",
            other
        ),
    }

    Ok(())
}
