use crate::error::AppError;

/// Outcome classification for one synthesis attempt. Every failure path of
/// the external tool wrapper ends up in exactly one of these variants; the
/// wrapper never raises past its boundary.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("kokoro-tts executable not found in any search path")]
    ToolNotFound,

    #[error("kokoro-tts exited with an error: {0}")]
    ToolExecutionFailed(String),

    #[error("kokoro-tts reported success but the output file is missing")]
    OutputMissing,

    #[error("synthesis timed out after {0} seconds")]
    Timeout(u64),

    #[error("synthesis I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Synthesis(e) => AppError::ExternalService(e.to_string()),
        }
    }
}
