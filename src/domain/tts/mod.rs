pub mod error;
pub mod service;
pub mod voices;

pub use error::{SynthesisError, TtsServiceError};
pub use service::{TtsService, TtsServiceApi};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_VOICE: &str = "af_sarah";
pub const DEFAULT_SPEED: f32 = 1.0;
pub const MAX_TEXT_CHARS: usize = 5000;

/// Request body for POST /generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Output formats the service knows how to label. Parsed at the validation
/// boundary so an unsupported format is a client error rather than a
/// mislabeled audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Validated input handed to the synthesizer backend.
#[derive(Debug, Clone)]
pub struct SynthesisSpec {
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub format: AudioFormat,
}

/// A finished synthesis: the audio file on disk plus serving metadata.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub path: PathBuf,
    pub file_name: String,
    pub format: AudioFormat,
}
