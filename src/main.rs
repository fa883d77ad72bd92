use anyhow::Result;
use settings_i18n::{
    config,
    i18n::{LanguageRegistry, TranslationTable, TranslationValidator},
    server,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("settings_i18n=info".parse()?),
        )
        .init();

    info!("Starting settings i18n server");

    let config = config::Config::from_env()?;

    let default = LanguageRegistry::get().default_language();
    info!("Default locale: {} ({})", default.code, default.native_name);

    // Check the bundled tables before serving them
    let report = TranslationValidator::validate(TranslationTable::global());
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }
    if report.is_clean() {
        info!("Translation tables are complete");
    }

    server::serve(&config).await
}
