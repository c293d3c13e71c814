use std::sync::Arc;

use tracing::{error, warn};

use super::error::TranslateError;
use super::fallback::fake_translate;
use super::interface::TranslationProvider;
use super::openai::OpenAiTranslator;
use crate::config::OpenAiConfig;

/// Outcome of a resolution attempt. Degraded mode is a first-class value
/// rather than a caught exception, so callers and tests can branch on it.
#[derive(Debug)]
pub enum Resolution {
    /// The provider answered; payload is the trimmed translation.
    Remote(String),
    /// The fallback transform was substituted; `reason` records why.
    Fallback {
        text: String,
        reason: TranslateError,
    },
}

impl Resolution {
    pub fn into_text(self) -> String {
        match self {
            Resolution::Remote(text) => text,
            Resolution::Fallback { text, .. } => text,
        }
    }
}

/// Fallback-aware wrapper around the remote translation call.
///
/// Single attempt, no retry or backoff. Every failure kind except a
/// transport exception is absorbed here into `Resolution::Fallback`;
/// transport errors propagate so the request handler can annotate the
/// degraded response.
pub struct TranslationResolver {
    provider: Option<Arc<dyn TranslationProvider>>,
}

impl TranslationResolver {
    /// Builds the OpenAI provider when a credential is configured. With no
    /// credential the resolver runs in offline/demo mode and answers every
    /// request with the fallback transform.
    pub fn new(config: &OpenAiConfig) -> Self {
        let provider = config.api_key.as_ref().map(|key| {
            Arc::new(OpenAiTranslator::new(
                config.base_url.clone(),
                config.model.clone(),
                key.clone(),
            )) as Arc<dyn TranslationProvider>
        });
        Self { provider }
    }

    /// Resolver backed by an arbitrary provider implementation.
    pub fn with_provider(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub async fn resolve(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Resolution, TranslateError> {
        let Some(provider) = &self.provider else {
            warn!("No OPENAI_API_KEY configured, using fallback translation");
            return Ok(Resolution::Fallback {
                text: fake_translate(text, target_lang),
                reason: TranslateError::NoCredential,
            });
        };

        match provider.translate(text, target_lang).await {
            Ok(raw) => {
                let translated = raw.trim();
                if translated.is_empty() {
                    warn!("Provider returned an empty translation for lang={}", target_lang);
                    Ok(Resolution::Fallback {
                        text: fake_translate(text, target_lang),
                        reason: TranslateError::EmptyTranslation,
                    })
                } else {
                    Ok(Resolution::Remote(translated.to_string()))
                }
            }
            Err(err @ TranslateError::Provider { .. }) => {
                error!("Translation provider error: {}", err);
                Ok(Resolution::Fallback {
                    text: fake_translate(text, target_lang),
                    reason: err,
                })
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Deterministic substitute provider covering each remote outcome.
    enum MockProvider {
        Reply(&'static str),
        Status(u16),
        ConnectionRefused,
    }

    #[async_trait]
    impl TranslationProvider for MockProvider {
        async fn translate(
            &self,
            _text: &str,
            _target_lang: &str,
        ) -> Result<String, TranslateError> {
            match self {
                MockProvider::Reply(reply) => Ok((*reply).to_string()),
                MockProvider::Status(status) => Err(TranslateError::Provider {
                    status: *status,
                    body: "{\"error\":\"boom\"}".to_string(),
                }),
                // A real reqwest error, manufactured against a closed
                // local port so no external network is involved.
                MockProvider::ConnectionRefused => {
                    let err = reqwest::Client::new()
                        .get("http://127.0.0.1:1/")
                        .send()
                        .await
                        .expect_err("port 1 must refuse connections");
                    Err(TranslateError::Transport(err))
                }
            }
        }
    }

    fn resolver_with(provider: MockProvider) -> TranslationResolver {
        TranslationResolver::with_provider(Arc::new(provider))
    }

    #[tokio::test]
    async fn remote_success_is_trimmed_and_exact() {
        let resolver = resolver_with(MockProvider::Reply("  Bonjour \n"));
        let resolution = resolver.resolve("hello", "fr").await.unwrap();
        match resolution {
            Resolution::Remote(text) => assert_eq!(text, "Bonjour"),
            other => panic!("expected remote resolution, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn provider_status_failure_falls_back() {
        let resolver = resolver_with(MockProvider::Status(500));
        let resolution = resolver.resolve("hello", "fr").await.unwrap();
        match resolution {
            Resolution::Fallback { text, reason } => {
                assert_eq!(text, fake_translate("hello", "fr"));
                assert!(matches!(reason, TranslateError::Provider { status: 500, .. }));
            }
            other => panic!("expected fallback resolution, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn whitespace_only_reply_falls_back() {
        let resolver = resolver_with(MockProvider::Reply("   \n\t"));
        let resolution = resolver.resolve("hello", "de").await.unwrap();
        match resolution {
            Resolution::Fallback { text, reason } => {
                assert_eq!(text, "[DE] hello");
                assert!(matches!(reason, TranslateError::EmptyTranslation));
            }
            other => panic!("expected fallback resolution, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_credential_never_calls_the_provider() {
        let resolver = TranslationResolver::new(&OpenAiConfig::default());
        for (lang, expected) in [
            ("en", "[EN] hello"),
            ("fr", "[FR] hello"),
            ("de", "[DE] hello"),
            ("xx", "hello"),
        ] {
            let resolution = resolver.resolve("hello", lang).await.unwrap();
            match resolution {
                Resolution::Fallback { text, reason } => {
                    assert_eq!(text, expected);
                    assert!(matches!(reason, TranslateError::NoCredential));
                }
                other => panic!("expected fallback resolution, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn transport_errors_propagate_to_the_caller() {
        let resolver = resolver_with(MockProvider::ConnectionRefused);
        let err = resolver.resolve("hello", "en").await.unwrap_err();
        assert!(matches!(err, TranslateError::Transport(_)));
    }
}
