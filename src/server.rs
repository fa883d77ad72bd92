//! HTTP surface for server-rendered pages and front-end bootstrapping.
//!
//! Every request's locale comes from its `language` cookie (see
//! [`resolve_from_request`]); the server never keeps locale state of its own.
//! Changing the language answers with the same `Set-Cookie` the client
//! session writes.

use crate::config::Config;
use crate::i18n::{
    resolve_from_request, Language, LanguageConfig, LanguageCookie, LanguageRegistry,
    LocaleError, LocaleMetrics, Messages, MetricsReport, TranslationTable,
};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Request},
    http::{header::SET_COOKIE, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/i18n/languages", get(languages))
        .route("/i18n/messages", get(messages))
        .route("/i18n/translate/:key", get(translate))
        .route("/i18n/language", put(change_language))
        .route("/i18n/metrics", get(metrics))
        .layer(middleware::from_fn(with_locale))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router())
        .await
        .context("HTTP server exited with an error")
}

/// Resolve the request locale and stash it in request extensions.
pub async fn with_locale(mut request: Request, next: Next) -> Response {
    let language = resolve_from_request(Some(request.headers()));
    request.extensions_mut().insert(language);
    next.run(request).await
}

/// Error responses of the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    Locale(LocaleError),
}

impl From<LocaleError> for ApiError {
    fn from(err: LocaleError) -> Self {
        ApiError::Locale(err)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Locale(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub language: Language,
    pub messages: Messages,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub language: Language,
    pub key: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeLanguageRequest {
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeLanguageResponse {
    pub language: Language,
}

async fn health() -> &'static str {
    "ok"
}

async fn languages() -> Json<Vec<LanguageConfig>> {
    Json(
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn messages(Extension(language): Extension<Language>) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        language,
        messages: TranslationTable::global().messages(language).clone(),
    })
}

async fn translate(
    Extension(language): Extension<Language>,
    Path(key): Path<String>,
) -> Json<TranslateResponse> {
    let text = TranslationTable::global()
        .translate(language, &key)
        .to_string();
    Json(TranslateResponse {
        language,
        key,
        text,
    })
}

async fn change_language(
    Json(body): Json<ChangeLanguageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let metrics = LocaleMetrics::global();
    let language = match Language::from_code(&body.language) {
        Ok(language) => language,
        Err(e) => {
            warn!(requested = %body.language, "{}", e);
            metrics.record_change_rejected();
            return Err(e.into());
        }
    };

    metrics.record_change_accepted();
    info!(locale = language.code(), "language cookie issued");
    Ok((
        [(SET_COOKIE, LanguageCookie::new(language).to_string())],
        Json(ChangeLanguageResponse { language }),
    ))
}

async fn metrics() -> Json<MetricsReport> {
    Json(LocaleMetrics::global().report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_error_maps_to_bad_request() {
        let response = ApiError::from(LocaleError::Unsupported("xx".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn test_languages_lists_registry() {
        let Json(list) = languages().await;
        let codes: Vec<_> = list.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["ko", "en", "ja"]);
    }

    #[tokio::test]
    async fn test_translate_handler_uses_extension_locale() {
        let Json(body) = translate(
            Extension(Language::Japanese),
            Path("settings.title".to_string()),
        )
        .await;
        assert_eq!(body.text, "設定");
        assert_eq!(body.language, Language::Japanese);
    }
}
