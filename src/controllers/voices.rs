use axum::Json;

use crate::domain::tts::voices::{voice_catalog, VoicesResponse};

/// GET /voices - static catalog of voice identifiers
pub async fn list_voices() -> Json<VoicesResponse> {
    Json(voice_catalog())
}
