use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::TranslateError;

/// Narrow seam over the remote translation backend, so the resolver can be
/// exercised with a substitute implementation instead of a live endpoint.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Request a translation of `text` into the language identified by ISO
    /// code `target_lang`. Returns the raw completion text, untrimmed; the
    /// resolver owns extraction and empty-result handling.
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated: String,
    /// Present only when a transport exception forced the handler itself
    /// to substitute the fallback transform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
