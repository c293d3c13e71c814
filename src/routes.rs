use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::state::AppState;
use crate::translate::{
    fake_translate, Resolution, TranslateError, TranslateRequest, TranslateResponse,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/translate", post(translate))
}

async fn liveness() -> &'static str {
    "API de traducción (OpenAI + fallback) está funcionando ✅"
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<Value>)> {
    // Empty strings count as missing
    let (text, target_lang) = match (payload.text.as_deref(), payload.target_lang.as_deref()) {
        (Some(text), Some(lang)) if !text.is_empty() && !lang.is_empty() => (text, lang),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": TranslateError::MissingParameter.to_string() })),
            ))
        }
    };

    match state.resolver.resolve(text, target_lang).await {
        Ok(resolution) => {
            if let Resolution::Fallback { reason, .. } = &resolution {
                debug!("Substituted fallback translation: {}", reason);
            }
            Ok(Json(TranslateResponse {
                translated: resolution.into_text(),
                error: None,
            }))
        }
        // Transport exceptions still answer 200 with a usable translation;
        // the caller is never left without a `translated` field.
        Err(err) => {
            error!("Error backend /translate: {}", err);
            Ok(Json(TranslateResponse {
                translated: fake_translate(text, target_lang),
                error: Some("Excepción en backend, se devuelve traducción falsa".to_string()),
            }))
        }
    }
}
