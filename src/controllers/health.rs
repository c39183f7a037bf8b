use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::synthesizer::SpeechSynthesizer;

/// GET / - service metadata
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "service": "Kokoro TTS API",
            "status": "running",
            "endpoints": {
                "generate": "POST /generate",
                "voices": "GET /voices",
                "health": "GET /health"
            }
        })),
    )
}

/// GET /health - reports whether the external tool currently resolves
pub async fn health(
    State(synthesizer): State<Arc<dyn SpeechSynthesizer>>,
) -> impl IntoResponse {
    let script = synthesizer.availability();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "kokoro_available": script.is_some(),
            "script_path": script.map(|p| p.display().to_string()),
        })),
    )
}
