use super::error::TtsServiceError;
use super::{
    AudioFormat, GenerateRequest, GeneratedAudio, SynthesisSpec, DEFAULT_SPEED, DEFAULT_VOICE,
    MAX_TEXT_CHARS,
};
use crate::infrastructure::synthesizer::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl TtsService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Generate speech for one request.
    ///
    /// Validates the text and format, fills in defaults, and hands the
    /// request to the synthesizer backend. The backend is never touched
    /// when validation fails. Returns the audio file the backend produced;
    /// ownership of that file passes to the caller.
    async fn generate(&self, request: GenerateRequest)
        -> Result<GeneratedAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GeneratedAudio, TtsServiceError> {
        if request.text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let char_count = request.text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(TtsServiceError::Invalid(format!(
                "Text too long (max {} characters)",
                MAX_TEXT_CHARS
            )));
        }

        let format = match request.format.as_deref() {
            None => AudioFormat::Mp3,
            Some(raw) => raw.parse().map_err(|_| {
                TtsServiceError::Invalid(format!(
                    "Unsupported audio format '{}' (expected mp3 or wav)",
                    raw
                ))
            })?,
        };

        let spec = SynthesisSpec {
            text: request.text,
            voice: request.voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            speed: request.speed.unwrap_or(DEFAULT_SPEED),
            format,
        };

        tracing::info!(
            voice = %spec.voice,
            speed = spec.speed,
            format = %spec.format,
            text_length = char_count,
            "TTS generation request"
        );

        let path = self.synthesizer.synthesize(&spec).await?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        Ok(GeneratedAudio {
            path,
            file_name,
            format,
        })
    }
}
