use std::sync::Arc;

use crate::config::Config;
use crate::translate::TranslationResolver;

/// Shared application state. Everything in here is immutable after
/// startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resolver: Arc<TranslationResolver>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = Arc::new(TranslationResolver::new(&config.openai));
        Self { config, resolver }
    }
}
