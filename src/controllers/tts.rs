use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{GenerateRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /generate - synthesize speech and stream back the audio file
    pub async fn generate(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller
            .tts_service
            .generate(request)
            .await
            .map_err(AppError::from)?;

        // The response is only built once the file is fully read, so a
        // half-written file never reaches the client.
        let bytes = tokio::fs::read(&audio.path)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read audio file: {}", e)))?;

        // Delete-after-serve: output files do not accumulate on disk.
        if let Err(e) = tokio::fs::remove_file(&audio.path).await {
            tracing::warn!(
                path = %audio.path.display(),
                error = %e,
                "Failed to remove served audio file"
            );
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            audio.format.content_type().parse().unwrap(),
        );
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", audio.file_name)
                .parse()
                .unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(bytes)))
    }
}
