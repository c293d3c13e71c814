use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::error::TranslateError;
use super::interface::TranslationProvider;

/// OpenAI-compatible chat-completion provider.
///
/// One client, one awaited call per translation. No retries: a failed call
/// is reported to the resolver, which falls back.
pub struct OpenAiTranslator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiTranslator {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        info!(
            "Initialized OpenAiTranslator: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    fn system_prompt(target_lang: &str) -> String {
        format!(
            "You are a translation engine. Translate ALL user text to the language \
             with ISO code \"{}\". Respond ONLY with the translated text, no explanations.",
            target_lang
        )
    }
}

#[async_trait]
impl TranslationProvider for OpenAiTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": Self::system_prompt(target_lang) },
                { "role": "user", "content": text },
            ],
            // Pinned to 0 so identical input yields deterministic output
            "temperature": 0,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
