use serde::{Deserialize, Serialize};

/// Process configuration, resolved once at startup. Nothing reads the
/// environment after this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Absent key means forced fallback mode, not an error.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_port());

        Self {
            port,
            openai: OpenAiConfig {
                api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| default_base_url()),
                model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model()),
            },
        }
    }
}

fn default_port() -> u16 {
    3001
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}
